use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    /// Attach the line being entered or executed. An error that already
    /// knows its line keeps it.
    pub fn in_line_number(&self, line: Option<LineNumber>) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number.or(line),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    Overflow,
    UndefinedVariable,
    DivisionByZero,
    UndefinedLine,
    MissingLine,
    Break,
    DirectStatementInFile,
    FileNotFound,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "SYNTAX ERROR",
            Overflow => "OVERFLOW",
            UndefinedVariable => "VARIABLE NOT DEFINED",
            DivisionByZero => "DIVIDE BY ZERO",
            UndefinedLine | MissingLine => "LINE NUMBER ERROR",
            Break => "BREAK",
            DirectStatementInFile => "DIRECT STATEMENT IN FILE",
            FileNotFound => "FILE NOT FOUND",
            InternalError => "INTERNAL ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}
