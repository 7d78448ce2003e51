use crate::{LocalsError, Result, Utf8};

/// The constant pool of a class file, as far as local variable attributes
/// need it: only `CONSTANT_Utf8_info` entries keep their contents.
#[derive(Debug, Default)]
pub struct ConstantPool {
    cp_infos: Vec<CpInfo>,
}
impl ConstantPool {
    pub fn new(cp_infos: Vec<CpInfo>) -> Self {
        Self { cp_infos }
    }

    /// The entry at the 1-based `index`.
    pub fn get(&self, index: u16) -> Result<&CpInfo> {
        (index as usize)
            .checked_sub(1)
            .and_then(|i| self.cp_infos.get(i))
            .ok_or(LocalsError::ConstantPoolIndexOutOfRange(index))
    }

    pub fn utf8(&self, index: u16) -> Result<&Utf8> {
        match self.get(index)? {
            CpInfo::Utf8(s) => Ok(s),
            _ => Err(LocalsError::UnexpectedConstantPoolEntry(index)),
        }
    }
}
impl FromIterator<CpInfo> for ConstantPool {
    fn from_iter<I: IntoIterator<Item = CpInfo>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a ConstantPool {
    type Item = &'a CpInfo;
    type IntoIter = std::slice::Iter<'a, CpInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.cp_infos.iter()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum CpInfo {
    Utf8(Utf8),
    /// Any other constant, by tag.
    Other(u8),
    /// The second slot of a `Long` or `Double` constant.
    Unusable,
}
