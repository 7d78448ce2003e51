use std::sync::{Arc, OnceLock};

use log::{debug, log_enabled, trace, warn, Level};

use crate::{LocalVariable, LocalsError, Result, Utf8};

pub type Iter<'a> = std::iter::Map<
    std::slice::Iter<'a, Option<LocalVariable>>,
    fn(&'a Option<LocalVariable>) -> Option<&'a LocalVariable>,
>;

/// A local variable list under construction. Every slot starts out unset.
#[derive(Debug)]
pub struct LocalVariableListBuilder {
    slots: Vec<Option<LocalVariable>>,
}
impl LocalVariableListBuilder {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, n: usize) -> Result<Option<&LocalVariable>> {
        get_slot(&self.slots, n)
    }

    pub fn set(&mut self, n: usize, local: LocalVariable) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(n)
            .ok_or(LocalsError::IndexOutOfRange { index: n, len })?;
        *slot = Some(local);

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_local(
        &mut self,
        n: usize,
        start_pc: u32,
        length: u32,
        name: Utf8,
        descriptor: Option<Utf8>,
        signature: Option<Utf8>,
        index: u16,
    ) -> Result<()> {
        let local = LocalVariable::new(start_pc, length, name, descriptor, signature, index)?;
        self.set(n, local)
    }

    pub fn freeze(self) -> Arc<LocalVariableList> {
        Arc::new(LocalVariableList {
            slots: self.slots.into_boxed_slice(),
        })
    }
}

/// The contents of `LocalVariableTable` and `LocalVariableTypeTable`
/// attributes, or a combination of the two. Immutable once built.
#[derive(Debug, PartialEq, Eq)]
pub struct LocalVariableList {
    slots: Box<[Option<LocalVariable>]>,
}
impl LocalVariableList {
    /// The shared zero-length list.
    pub fn empty() -> Arc<Self> {
        static EMPTY: OnceLock<Arc<LocalVariableList>> = OnceLock::new();

        EMPTY
            .get_or_init(|| {
                Arc::new(LocalVariableList {
                    slots: Box::new([]),
                })
            })
            .clone()
    }

    fn is_shared_empty(list: &Arc<Self>) -> bool {
        list.slots.is_empty() && Arc::ptr_eq(list, &Self::empty())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, n: usize) -> Result<Option<&LocalVariable>> {
        get_slot(&self.slots, n)
    }

    /// The slots in order; unset slots are `None`.
    pub fn iter<'a>(&'a self) -> Iter<'a> {
        let as_ref: fn(&'a Option<LocalVariable>) -> Option<&'a LocalVariable> = Option::as_ref;
        self.slots.iter().map(as_ref)
    }

    fn locals(&self) -> impl Iterator<Item = &LocalVariable> + '_ {
        self.slots.iter().flatten()
    }

    /// `first` followed by `second`. When `first` is the shared empty list,
    /// `second` itself is returned rather than a copy.
    pub fn concat(first: &Arc<Self>, second: &Arc<Self>) -> Arc<Self> {
        if Self::is_shared_empty(first) {
            return Arc::clone(second);
        }

        debug!(
            "concatenating local variable lists of {} and {} entries",
            first.len(),
            second.len()
        );

        let slots = first.slots.iter().chain(second.slots.iter()).cloned();

        Arc::new(Self {
            slots: slots.collect(),
        })
    }

    /// A list identical to `descriptors`, except that each entry matched by
    /// an entry of `signatures` in everything but type is given that entry's
    /// signature. Signatures without a matching descriptor entry are dropped.
    pub fn merge_descriptors_and_signatures(descriptors: &Self, signatures: &Self) -> Arc<Self> {
        let slots = descriptors
            .slots
            .iter()
            .map(|slot| {
                let local = slot.as_ref()?;
                let signature = signatures
                    .item_to_local(local)
                    .and_then(LocalVariable::signature);

                Some(match signature {
                    Some(signature) => local.with_signature(signature.clone()),
                    None => local.clone(),
                })
            })
            .collect();

        if log_enabled!(Level::Debug) {
            let dropped = signatures.count_unmatched(descriptors);
            if dropped > 0 {
                warn!(
                    "dropping {} of {} signature entries with no matching descriptor entry",
                    dropped,
                    signatures.len()
                );
            }
            debug!(
                "merged {} descriptor entries with {} signature entries",
                descriptors.len(),
                signatures.len()
            );
        }

        Arc::new(Self { slots })
    }

    /// How many entries have no counterpart in `other` matching in
    /// everything but type.
    pub fn count_unmatched(&self, other: &Self) -> usize {
        self.locals()
            .filter(|local| other.item_to_local(local).is_none())
            .count()
    }

    /// The first entry describing the same variable as `item`, ignoring
    /// descriptor and signature.
    pub fn item_to_local(&self, item: &LocalVariable) -> Option<&LocalVariable> {
        self.locals().find(|local| local.matches_all_but_type(item))
    }

    /// The first entry live in local `index` at address `pc`.
    pub fn pc_and_index_to_local(&self, pc: u32, index: u16) -> Option<&LocalVariable> {
        let found = self
            .locals()
            .find(|local| local.matches_pc_and_index(pc, index));
        if found.is_none() {
            trace!("no local variable in slot {} at pc {}", index, pc);
        }

        found
    }
}
impl<'a> IntoIterator for &'a LocalVariableList {
    type Item = Option<&'a LocalVariable>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl FromIterator<LocalVariable> for LocalVariableList {
    fn from_iter<I: IntoIterator<Item = LocalVariable>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

fn get_slot(slots: &[Option<LocalVariable>], n: usize) -> Result<Option<&LocalVariable>> {
    slots
        .get(n)
        .map(Option::as_ref)
        .ok_or(LocalsError::IndexOutOfRange {
            index: n,
            len: slots.len(),
        })
}
