use std::{fmt, sync::Arc};

use crate::{ConstantPool, CpInfo, LocalVariableList, LocalsError, Parser, Result};

pub const LOCAL_VARIABLE_TABLE: &str = "LocalVariableTable";
pub const LOCAL_VARIABLE_TYPE_TABLE: &str = "LocalVariableTypeTable";

pub struct Attribute {
    pub attribute_name_index: u16,
    pub info: Vec<u8>,
}
impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("attribute_name_index", &self.attribute_name_index)
            .field("info", &format!("({} bytes)", self.info.len()))
            .finish()
    }
}
impl Attribute {
    fn is_named(&self, name: &str, constant_pool: &ConstantPool) -> bool {
        matches!(constant_pool.get(self.attribute_name_index), Ok(CpInfo::Utf8(s)) if s == name)
    }
}

/// The attributes of a `Code` attribute.
#[derive(Debug)]
pub struct Attributes(pub Vec<Attribute>);
impl Attributes {
    pub fn find_by_name(&self, name: &str, constant_pool: &ConstantPool) -> Option<&Attribute> {
        self.0.iter().find(|a| a.is_named(name, constant_pool))
    }

    pub fn filter_by_name<'a>(
        &'a self,
        name: &'a str,
        constant_pool: &'a ConstantPool,
    ) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.0
            .iter()
            .filter(move |a| a.is_named(name, constant_pool))
    }

    /// Every `LocalVariableTable` concatenated, merged with every
    /// `LocalVariableTypeTable` concatenated.
    pub fn local_variables(&self, constant_pool: &ConstantPool) -> Result<Arc<LocalVariableList>> {
        let descriptors = self
            .filter_by_name(LOCAL_VARIABLE_TABLE, constant_pool)
            .try_fold(LocalVariableList::empty(), |list, a| {
                let table = Parser::new(&a.info).parse_local_variable_table(constant_pool)?;
                Ok::<_, LocalsError>(LocalVariableList::concat(&list, &table))
            })?;

        let signatures = self
            .filter_by_name(LOCAL_VARIABLE_TYPE_TABLE, constant_pool)
            .try_fold(LocalVariableList::empty(), |list, a| {
                let table = Parser::new(&a.info).parse_local_variable_type_table(constant_pool)?;
                Ok::<_, LocalsError>(LocalVariableList::concat(&list, &table))
            })?;

        if descriptors.is_empty() {
            return Ok(LocalVariableList::empty());
        }

        Ok(LocalVariableList::merge_descriptors_and_signatures(
            &descriptors,
            &signatures,
        ))
    }
}

/// One raw record of either attribute. `type_index` names a descriptor in a
/// `LocalVariableTable` and a signature in a `LocalVariableTypeTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalVariableTableEntry {
    pub start_pc: u16,
    pub length: u16,
    pub name_index: u16,
    pub type_index: u16,
    pub index: u16,
}
