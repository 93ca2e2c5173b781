use crate::error;
use crate::lang::ast::Ident;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Reading a variable that was never assigned is an error, not zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn is_defined(&self, ident: &Ident) -> bool {
        self.vars.contains_key(ident.name())
    }

    pub fn fetch(&self, ident: &Ident) -> Result<i32> {
        match self.vars.get(ident.name()) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable)),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: i32) {
        match self.vars.get_mut(ident.name()) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(ident.name().to_string(), value);
            }
        };
    }
}
