use crate::Address;

pub struct Error {
    code: u16,
    address: Option<Address>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            address: None,
            message: "",
        }
    }

    pub fn at_address(&self, address: Address) -> Error {
        debug_assert!(self.address.is_none());
        Error {
            code: self.code,
            address: Some(address),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            address: self.address,
            message,
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Error) -> bool {
        self.code == other.code
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    UndefinedLabel = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
    InternalError = 51,
    InputPastEnd = 62,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            8 => "UNDEFINED LABEL",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            51 => "INTERNAL ERROR",
            62 => "INPUT PAST END",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" IN {}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
