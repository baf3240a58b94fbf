use crate::error::CommandError;
use crate::parser::{Invocation, Literal};

/// Typed access to an invocation's keyword arguments.
///
/// Every getter consumes its argument; `finish` then rejects whatever
/// is left, so unknown argument names fail before the operation runs.
pub(crate) struct Args {
    op: String,
    entries: Vec<(String, Literal)>,
}

impl Args {
    pub fn new(invocation: Invocation) -> Self {
        Self {
            op: invocation.name,
            entries: invocation.args,
        }
    }

    pub fn op(&self) -> &str {
        &self.op
    }

    /// Remove and return an argument. An explicit `None` literal
    /// counts as omitted.
    fn take(&mut self, key: &str) -> Option<Literal> {
        let index = self.entries.iter().position(|(name, _)| name == key)?;
        let (_, value) = self.entries.remove(index);
        match value {
            Literal::None => None,
            other => Some(other),
        }
    }

    fn bad(&self, key: &str, problem: impl Into<String>) -> CommandError {
        CommandError::BadArgument {
            op: self.op.clone(),
            arg: key.to_string(),
            problem: problem.into(),
        }
    }

    pub fn opt_f64(&mut self, key: &str) -> Result<Option<f64>, CommandError> {
        match self.take(key) {
            None => Ok(None),
            Some(Literal::Number(value)) => Ok(Some(value)),
            Some(other) => Err(self.bad(key, format!("expected a number, got {other:?}"))),
        }
    }

    pub fn req_f64(&mut self, key: &str) -> Result<f64, CommandError> {
        self.opt_f64(key)?
            .ok_or_else(|| self.bad(key, "is required"))
    }

    pub fn f64_or(&mut self, key: &str, default: f64) -> Result<f64, CommandError> {
        Ok(self.opt_f64(key)?.unwrap_or(default))
    }

    pub fn opt_str(&mut self, key: &str) -> Result<Option<String>, CommandError> {
        match self.take(key) {
            None => Ok(None),
            Some(Literal::Str(value)) => Ok(Some(value)),
            Some(other) => Err(self.bad(key, format!("expected a string, got {other:?}"))),
        }
    }

    pub fn req_str(&mut self, key: &str) -> Result<String, CommandError> {
        self.opt_str(key)?
            .ok_or_else(|| self.bad(key, "is required"))
    }

    pub fn str_or(&mut self, key: &str, default: &str) -> Result<String, CommandError> {
        Ok(self.opt_str(key)?.unwrap_or_else(|| default.to_string()))
    }

    pub fn opt_bool(&mut self, key: &str) -> Result<Option<bool>, CommandError> {
        match self.take(key) {
            None => Ok(None),
            Some(Literal::Bool(value)) => Ok(Some(value)),
            Some(other) => Err(self.bad(key, format!("expected a boolean, got {other:?}"))),
        }
    }

    pub fn bool_or(&mut self, key: &str, default: bool) -> Result<bool, CommandError> {
        Ok(self.opt_bool(key)?.unwrap_or(default))
    }

    pub fn opt_list(&mut self, key: &str) -> Result<Option<Vec<String>>, CommandError> {
        match self.take(key) {
            None => Ok(None),
            Some(Literal::List(items)) => Ok(Some(items)),
            Some(other) => {
                Err(self.bad(key, format!("expected a list of strings, got {other:?}")))
            }
        }
    }

    pub fn req_list(&mut self, key: &str) -> Result<Vec<String>, CommandError> {
        self.opt_list(key)?
            .ok_or_else(|| self.bad(key, "is required"))
    }

    /// Reject any argument no getter claimed.
    pub fn finish(self) -> Result<(), CommandError> {
        match self.entries.into_iter().next() {
            None => Ok(()),
            Some((arg, _)) => Err(CommandError::UnknownArgument { op: self.op, arg }),
        }
    }
}
