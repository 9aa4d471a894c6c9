//! Attribute table assembly and decoding.

use core::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::Result;
use crate::catalog::EffectKind;
use crate::error::AttributeError;
use crate::record::{AttributeRecord, RECORD_LEN};
use crate::validate::catalog_status;

/// Ordered attribute records for the effect kinds a device implements.
///
/// The byte form is what the driver's persistence layer stores under the
/// device's `OemForceFeedback\Effects` key: [`RECORD_LEN`] bytes per kind,
/// in the order the device lists them.
///
/// # Examples
///
/// ```
/// use ffb_effect_attributes::{AttributeTable, EffectKind};
///
/// let table = AttributeTable::assemble(&[EffectKind::ConstantForce, EffectKind::Friction])?;
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.to_bytes().len(), 40);
/// # Ok::<(), ffb_effect_attributes::AttributeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeTable {
    records: Vec<AttributeRecord>,
}

impl AttributeTable {
    /// Assemble records for `supported`, preserving its order.
    ///
    /// # Errors
    ///
    /// - [`AttributeError::EmptyKindList`] if `supported` is empty
    /// - [`AttributeError::DuplicateKind`] if a kind is listed twice
    /// - [`AttributeError::Catalog`] if the effect catalog is inconsistent
    pub fn assemble(supported: &[EffectKind]) -> Result<Self> {
        catalog_status()?;
        check_kind_list(supported)?;

        let records: Vec<AttributeRecord> = supported
            .iter()
            .copied()
            .map(AttributeRecord::encode)
            .collect();

        debug!(
            kinds = records.len(),
            bytes = records.len() * RECORD_LEN,
            "Assembled effect attribute table"
        );

        Ok(Self { records })
    }

    /// Assemble records for every kind in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Catalog`] if the effect catalog is
    /// inconsistent.
    pub fn full() -> Result<Self> {
        Self::assemble(&EffectKind::ALL)
    }

    /// Decode a stored attribute buffer.
    ///
    /// Records are taken as-is; use [`AttributeRecord::is_canonical`] to
    /// compare them against the catalog.
    ///
    /// # Errors
    ///
    /// - [`AttributeError::MisalignedBuffer`] if the length is not a
    ///   multiple of [`RECORD_LEN`]
    /// - [`AttributeError::EmptyKindList`] if the buffer is empty
    /// - [`AttributeError::UnknownIdentity`] if a record names no catalog kind
    /// - [`AttributeError::DuplicateKind`] if two records name the same kind
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % RECORD_LEN != 0 {
            return Err(AttributeError::MisalignedBuffer { len: bytes.len() });
        }

        let mut records = Vec::with_capacity(bytes.len() / RECORD_LEN);
        let mut kinds = Vec::with_capacity(bytes.len() / RECORD_LEN);
        for chunk in bytes.chunks_exact(RECORD_LEN) {
            let mut raw = [0u8; RECORD_LEN];
            raw.copy_from_slice(chunk);
            let record = AttributeRecord::from_bytes(&raw);
            kinds.push(EffectKind::try_from(record.effect_id)?);
            records.push(record);
        }
        check_kind_list(&kinds)?;

        Ok(Self { records })
    }

    /// Records in device order.
    #[must_use]
    pub fn records(&self) -> &[AttributeRecord] {
        &self.records
    }

    /// Kinds in device order.
    pub fn kinds(&self) -> impl Iterator<Item = EffectKind> + '_ {
        self.records.iter().filter_map(AttributeRecord::effect_kind)
    }

    /// Record for `kind`, if the table contains it.
    #[must_use]
    pub fn get(&self, kind: EffectKind) -> Option<&AttributeRecord> {
        self.records
            .iter()
            .find(|record| record.effect_id == kind.identity().as_u32())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records. Never true for an assembled table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encoded length in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.records.len() * RECORD_LEN
    }

    /// Concatenated little-endian records.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        for record in &self.records {
            bytes.extend_from_slice(&record.to_bytes());
        }
        bytes
    }
}

impl<'a> IntoIterator for &'a AttributeTable {
    type Item = &'a AttributeRecord;
    type IntoIter = core::slice::Iter<'a, AttributeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One registry dump line per record.
impl fmt::Display for AttributeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for record in &self.records {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
            first = false;
        }
        Ok(())
    }
}

fn check_kind_list(kinds: &[EffectKind]) -> Result<()> {
    if kinds.is_empty() {
        warn!("Rejected attribute table request with no effect kinds");
        return Err(AttributeError::EmptyKindList);
    }

    let mut first_seen: [Option<usize>; EffectKind::COUNT] = [None; EffectKind::COUNT];
    for (position, kind) in kinds.iter().enumerate() {
        let Some(slot) = first_seen.get_mut(kind.index()) else {
            continue;
        };
        if let Some(first) = *slot {
            warn!(
                kind = %kind,
                first,
                second = position,
                "Rejected attribute table request with duplicate effect kind"
            );
            return Err(AttributeError::DuplicateKind {
                kind: *kind,
                first,
                second: position,
            });
        }
        *slot = Some(position);
    }

    Ok(())
}

/// Assemble the attribute table for `supported`.
///
/// # Errors
///
/// See [`AttributeTable::assemble`].
pub fn assemble(supported: &[EffectKind]) -> Result<AttributeTable> {
    AttributeTable::assemble(supported)
}
