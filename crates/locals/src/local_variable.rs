use crate::{LocalItem, LocalsError, Result, Type, Utf8};

/// One entry of a `LocalVariableTable` and/or `LocalVariableTypeTable`:
/// a named local slot and the address range over which it is live.
///
/// At least one of `descriptor` or `signature` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalVariable {
    start_pc: u32,
    length: u32,
    name: Utf8,
    descriptor: Option<Utf8>,
    signature: Option<Utf8>,
    index: u16,
}
impl LocalVariable {
    pub fn new(
        start_pc: u32,
        length: u32,
        name: Utf8,
        descriptor: Option<Utf8>,
        signature: Option<Utf8>,
        index: u16,
    ) -> Result<Self> {
        if descriptor.is_none() && signature.is_none() {
            return Err(LocalsError::InvalidArgument(
                "descriptor and signature are both absent",
            ));
        }

        if start_pc.checked_add(length).is_none() {
            return Err(LocalsError::InvalidArgument("start_pc + length overflows"));
        }

        Ok(Self {
            start_pc,
            length,
            name,
            descriptor,
            signature,
            index,
        })
    }

    /// The first address at which the variable is live.
    pub fn start_pc(&self) -> u32 {
        self.start_pc
    }

    /// The number of address units the variable stays live for.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The first address past the live range.
    pub fn end_pc(&self) -> u32 {
        self.start_pc + self.length
    }

    pub fn name(&self) -> &Utf8 {
        &self.name
    }

    pub fn descriptor(&self) -> Option<&Utf8> {
        self.descriptor.as_ref()
    }

    pub fn signature(&self) -> Option<&Utf8> {
        self.signature.as_ref()
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    /// The type named by the descriptor. Signature-only entries have none.
    pub fn ty(&self) -> Result<Type> {
        let descriptor = self
            .descriptor
            .as_ref()
            .ok_or(LocalsError::MissingDescriptor)?;

        Type::from_descriptor(descriptor)
    }

    /// The `(name, signature)` pair registers carry for this variable.
    pub fn local_item(&self) -> LocalItem {
        LocalItem::named(self.name.clone(), self.signature.clone())
    }

    pub fn with_signature(&self, signature: Utf8) -> Self {
        Self {
            signature: Some(signature),
            ..self.clone()
        }
    }

    /// Whether this variable occupies local `index` at address `pc`.
    ///
    /// A class file lists a variable's start as the address just past the
    /// instruction that stores it, so that store does not match.
    pub fn matches_pc_and_index(&self, pc: u32, index: u16) -> bool {
        index == self.index && pc >= self.start_pc && pc - self.start_pc < self.length
    }

    /// Whether `other` describes the same variable, ignoring descriptor and
    /// signature.
    pub fn matches_all_but_type(&self, other: &LocalVariable) -> bool {
        self.start_pc == other.start_pc
            && self.length == other.length
            && self.index == other.index
            && self.name == other.name
    }
}
