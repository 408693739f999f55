use std::{collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{
    ast::ast::Variable,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

/// Declared variables of one parse, by name.
#[derive(Debug, Default)]
pub struct Environment {
    pub variable_lookup: HashMap<String, Rc<Variable>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    /// Adds `variable`. Names may only be declared once.
    pub fn declare_variable(&mut self, variable: Rc<Variable>, token: &Token) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&variable.name) {
            Err(Error::at_token(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: variable.name.clone(),
                },
                token,
            ))
        } else {
            trace!(name = %variable.name, ty = %variable.ty, "declared variable");
            self.variable_lookup.insert(variable.name.clone(), variable);
            Ok(())
        }
    }

    /// Looks up `name`, failing at `token` if it was never declared.
    pub fn get_variable(&self, name: &str, token: &Token) -> Result<Rc<Variable>, Error> {
        self.variable_lookup.get(name).map(Rc::clone).ok_or_else(|| {
            Error::at_token(
                ErrorImpl::VariableNotDeclared {
                    variable: String::from(name),
                },
                token,
            )
        })
    }
}
