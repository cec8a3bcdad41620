use windows as Windows;
use Windows::core::IntoParam;
use Windows::Win32::Foundation::PWSTR;
use Windows::Win32::Media::Speech::{
    IEnumSpObjectTokens, ISpDataKey, ISpObjectToken, ISpObjectTokenCategory, SpObjectToken,
    SpObjectTokenCategory,
};
use Windows::Win32::System::Com::{CoCreateInstance, CLSCTX_ALL};

use super::com_util::{next_obj, opt_str_param, ComString};
use crate::Result;

pub(crate) struct Token {
    pub(crate) intf: ISpObjectToken,
}

impl Token {
    pub fn new<'s, S: IntoParam<'s, PWSTR>>(id: S) -> Result<Self> {
        let intf: ISpObjectToken = unsafe { CoCreateInstance(&SpObjectToken, None, CLSCTX_ALL) }?;
        unsafe { intf.SetId(None, id, false) }?;
        Ok(Token {
            intf,
        })
    }

    pub fn id(&self) -> Result<String> {
        let id = unsafe { ComString::from_raw(self.intf.GetId()?) };
        Ok(id.to_string_lossy())
    }

    /// The default value of the token's key, which holds its description.
    pub fn description(&self) -> Result<String> {
        let value = unsafe { ComString::from_raw(self.intf.GetStringValue("")?) };
        Ok(value.to_string_lossy())
    }

    pub fn attrs(&self) -> Result<Attributes> {
        let intf = unsafe { self.intf.OpenKey("Attributes") }?;
        Ok(Attributes {
            intf,
        })
    }
}

pub(crate) struct Attributes {
    intf: ISpDataKey,
}

impl Attributes {
    pub fn get(&self, name: &str) -> Option<String> {
        let value = unsafe { self.intf.GetStringValue(name) }.ok()?;
        Some(unsafe { ComString::from_raw(value) }.to_string_lossy())
    }

    /// Returns all name/value pairs, in registry order.
    pub fn all(&self) -> Vec<(String, String)> {
        (0..)
            .map_while(|idx| unsafe { self.intf.EnumValues(idx) }.ok())
            .map(|name| unsafe { ComString::from_raw(name) }.to_string_lossy())
            .map(|name| {
                let value = self.get(&name).unwrap_or_default();
                (name, value)
            })
            .collect()
    }
}

pub(crate) struct Tokens {
    intf: IEnumSpObjectTokens,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        unsafe { next_obj(&self.intf, IEnumSpObjectTokens::Next) }.ok()?.map(|intf| Token {
            intf,
        })
    }
}

pub(crate) struct Category {
    intf: ISpObjectTokenCategory,
}

impl Category {
    pub fn new(id: &str) -> Result<Self> {
        let intf: ISpObjectTokenCategory =
            unsafe { CoCreateInstance(&SpObjectTokenCategory, None, CLSCTX_ALL) }?;
        unsafe { intf.SetId(id, false) }?;
        Ok(Self {
            intf,
        })
    }

    pub fn enum_tokens<S: AsRef<str>>(&self, req_attrs: S, opt_attrs: Option<S>) -> Result<Tokens> {
        unsafe { self.intf.EnumTokens(req_attrs.as_ref(), opt_str_param(opt_attrs).abi()) }
            .map(|intf| Tokens {
                intf,
            })
            .map_err(Into::into)
    }
}
