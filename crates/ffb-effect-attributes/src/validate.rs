//! Definition-time validation of the effect catalog.
//!
//! Checks every invariant the composed records depend on. The shipped
//! catalog is validated once per process before the first table is built.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::error;

use crate::catalog::{
    CatalogEntry, EFFECT_CATALOG, EffectClass, EffectIdentity, EffectKind, FIRST_EFFECT_ID,
};
use crate::error::CatalogError;
use crate::flags::{CoordinateFlags, SUPPORTED_COORDINATES};
use crate::params::DYNAMIC_PARAMS;
use crate::rules::{ClassRules, EFFECT_RULES};

/// Validate a set of catalog rows against the shipped [`EFFECT_RULES`].
///
/// Rows must cover every [`EffectKind`] exactly once, in catalog order, with
/// identities assigned sequentially from `0x101`.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found.
pub fn validate_entries(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    validate_entries_with(&EFFECT_RULES, entries)
}

/// Validate catalog rows composed under `rules`.
///
/// Besides the row checks of [`validate_entries`], every composed
/// capability and static parameter set is checked against the bits its
/// class and subclass must never set, and the dynamic set must equal the
/// constant-force static set.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found.
pub fn validate_entries_with(
    rules: &ClassRules,
    entries: &[CatalogEntry],
) -> Result<(), CatalogError> {
    let mut seen_kinds = HashSet::with_capacity(entries.len());
    let mut seen_ids = HashSet::with_capacity(entries.len());

    for (position, entry) in entries.iter().enumerate() {
        if !seen_kinds.insert(entry.kind) {
            return Err(CatalogError::DuplicateEntry(entry.kind));
        }
        if !seen_ids.insert(entry.identity) {
            return Err(CatalogError::DuplicateIdentity(entry.identity));
        }
        if !entry.identity.is_in_range() {
            return Err(CatalogError::IdentityOutOfRange {
                kind: entry.kind,
                identity: entry.identity,
            });
        }
        let expected = u32::try_from(position)
            .ok()
            .and_then(|offset| FIRST_EFFECT_ID.checked_add(offset))
            .map(EffectIdentity::new);
        if expected != Some(entry.identity) {
            return Err(CatalogError::IdentityOutOfOrder {
                kind: entry.kind,
                actual: entry.identity,
                expected: expected.unwrap_or(entry.identity),
            });
        }
        validate_entry(rules, entry)?;
    }

    if let Some(missing) = EffectKind::ALL
        .iter()
        .find(|kind| !seen_kinds.contains(*kind))
    {
        return Err(CatalogError::MissingEntry(*missing));
    }

    Ok(())
}

fn validate_entry(rules: &ClassRules, entry: &CatalogEntry) -> Result<(), CatalogError> {
    let kind = entry.kind;

    let subclass_consistent = match entry.class {
        EffectClass::NonConditional => entry.subclass.is_some(),
        EffectClass::Conditional => entry.subclass.is_none(),
    };
    if !subclass_consistent {
        return Err(CatalogError::SubclassMismatch(kind));
    }

    if entry.base_type.is_condition() != (entry.class == EffectClass::Conditional) {
        return Err(CatalogError::BaseTypeMismatch(kind));
    }

    let forbidden_caps = rules.effect_type(entry) & entry.class.forbidden_capabilities().bits();
    if forbidden_caps != 0 {
        return Err(CatalogError::ForbiddenCapability {
            kind,
            bits: forbidden_caps,
        });
    }

    let mut forbidden_params = entry.class.forbidden_static_params();
    if let Some(subclass) = entry.subclass {
        forbidden_params |= subclass.forbidden_static_params();
    }
    let forbidden_params = rules
        .entry_static_params(entry)
        .intersection(forbidden_params);
    if !forbidden_params.is_empty() {
        return Err(CatalogError::ForbiddenStaticParam {
            kind,
            bits: forbidden_params.bits(),
        });
    }

    if rules.dynamic_params != DYNAMIC_PARAMS {
        return Err(CatalogError::DynamicParamsDiverge(kind));
    }

    Ok(())
}

/// Validate the coordinate flags advertised with every record.
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedCoordinates`] unless the flags are
/// exactly Cartesian | Polar.
pub fn validate_coordinates(coordinates: CoordinateFlags) -> Result<(), CatalogError> {
    if coordinates == CoordinateFlags::CARTESIAN | CoordinateFlags::POLAR {
        Ok(())
    } else {
        Err(CatalogError::UnsupportedCoordinates(coordinates.bits()))
    }
}

/// Validate the shipped effect catalog.
///
/// # Errors
///
/// Returns the first [`CatalogError`] found.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_entries_with(&EFFECT_RULES, &EFFECT_CATALOG)?;
    validate_coordinates(SUPPORTED_COORDINATES)
}

/// Cached result of [`validate_catalog`].
pub(crate) fn catalog_status() -> Result<(), CatalogError> {
    static STATUS: OnceLock<Result<(), CatalogError>> = OnceLock::new();
    STATUS
        .get_or_init(|| {
            let status = validate_catalog();
            if let Err(e) = &status {
                error!(
                    error = %e,
                    "Effect catalog failed validation; no attribute table will be produced"
                );
            }
            status
        })
        .clone()
}
