// https://docs.oracle.com/javase/specs/jvms/se19/html/jvms-4.html#jvms-4.7.13
// https://docs.oracle.com/javase/specs/jvms/se19/html/jvms-4.html#jvms-4.7.14

pub mod attributes;
mod constant_pool;
mod error;
mod list;
mod local_item;
mod local_variable;
mod parser;
mod types;
mod utf8;

pub use constant_pool::{ConstantPool, CpInfo};
pub use error::LocalsError;
pub use list::{LocalVariableList, LocalVariableListBuilder};
pub use local_item::LocalItem;
pub use local_variable::LocalVariable;
pub use parser::Parser;
pub use types::{Type, MAX_ARRAY_DIMENSIONS};
pub use utf8::Utf8;

pub type Result<T, E = LocalsError> = std::result::Result<T, E>;
