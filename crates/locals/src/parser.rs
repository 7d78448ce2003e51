use std::{io::Cursor, sync::Arc};

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::{
    attributes::{LocalVariableTableEntry, LOCAL_VARIABLE_TABLE, LOCAL_VARIABLE_TYPE_TABLE},
    ConstantPool, LocalVariable, LocalVariableList, LocalVariableListBuilder, LocalsError, Result,
};

type Endian = BigEndian;

/// Reads the `info` bytes of a `LocalVariableTable` or
/// `LocalVariableTypeTable` attribute.
pub struct Parser<'a> {
    r: Cursor<&'a [u8]>,
}
impl<'a> Parser<'a> {
    pub fn new(info: &'a [u8]) -> Self {
        Self {
            r: Cursor::new(info),
        }
    }

    /// A list whose entries carry descriptors only.
    pub fn parse_local_variable_table(
        mut self,
        constant_pool: &ConstantPool,
    ) -> Result<Arc<LocalVariableList>> {
        let entries = self.parse_entries(LOCAL_VARIABLE_TABLE)?;

        Self::build(&entries, |e| {
            LocalVariable::new(
                e.start_pc.into(),
                e.length.into(),
                constant_pool.utf8(e.name_index)?.clone(),
                Some(constant_pool.utf8(e.type_index)?.clone()),
                None,
                e.index,
            )
        })
    }

    /// A list whose entries carry signatures only.
    pub fn parse_local_variable_type_table(
        mut self,
        constant_pool: &ConstantPool,
    ) -> Result<Arc<LocalVariableList>> {
        let entries = self.parse_entries(LOCAL_VARIABLE_TYPE_TABLE)?;

        Self::build(&entries, |e| {
            LocalVariable::new(
                e.start_pc.into(),
                e.length.into(),
                constant_pool.utf8(e.name_index)?.clone(),
                None,
                Some(constant_pool.utf8(e.type_index)?.clone()),
                e.index,
            )
        })
    }

    fn build(
        entries: &[LocalVariableTableEntry],
        resolve: impl Fn(&LocalVariableTableEntry) -> Result<LocalVariable>,
    ) -> Result<Arc<LocalVariableList>> {
        let mut builder = LocalVariableListBuilder::new(entries.len());
        for (n, entry) in entries.iter().enumerate() {
            builder.set(n, resolve(entry)?)?;
        }

        Ok(builder.freeze())
    }

    /// The raw entries, checking that nothing follows the last one.
    pub fn parse_entries(
        &mut self,
        attribute: &'static str,
    ) -> Result<Vec<LocalVariableTableEntry>> {
        let table_length = self.read_u16()?;
        let entries = (0..table_length)
            .map(|_| self.parse_entry())
            .collect::<Result<Vec<_>>>()?;

        let remaining = self.r.get_ref().len() - self.r.position() as usize;
        if remaining > 0 {
            return Err(LocalsError::TrailingBytes {
                attribute,
                remaining,
            });
        }

        debug!("read {} entries from {} attribute", entries.len(), attribute);

        Ok(entries)
    }

    fn parse_entry(&mut self) -> Result<LocalVariableTableEntry> {
        let start_pc = self.read_u16()?;
        let length = self.read_u16()?;
        let name_index = self.read_u16()?;
        let type_index = self.read_u16()?;
        let index = self.read_u16()?;

        Ok(LocalVariableTableEntry {
            start_pc,
            length,
            name_index,
            type_index,
            index,
        })
    }

    fn read_u16(&mut self) -> Result<u16> {
        Ok(self.r.read_u16::<Endian>()?)
    }
}
