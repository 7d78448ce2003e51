use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalsError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Index {index} out of range for list of {len} locals")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Local variable has no type descriptor")]
    MissingDescriptor,
    #[error("Invalid type descriptor: {0:?}")]
    InvalidDescriptor(String),
    #[error("Expected Utf8 at constant pool index {0}")]
    UnexpectedConstantPoolEntry(u16),
    #[error("Constant pool index out of range: {0}")]
    ConstantPoolIndexOutOfRange(u16),
    #[error("{remaining} trailing bytes in {attribute} attribute")]
    TrailingBytes {
        attribute: &'static str,
        remaining: usize,
    },
}
