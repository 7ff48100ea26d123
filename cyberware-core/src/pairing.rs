//! Pairing identity derivation
//!
//! A pairing identity is generated once per device lifetime:
//!
//! 1. If the store already holds `ap_name`, the full triple is restored
//!    verbatim. A partial triple is corruption and is never repaired.
//! 2. Otherwise three colors are drawn, the name and code are composed,
//!    the triple is written and a flush is requested.
//!
//! `ap_name` is written last, so a write failure part-way through leaves
//! the store on the cold path for the next boot rather than half-restored.

use cyberware_types::{ColorEntry, PairingIdentity, Rgb};
use rand_core::RngCore;
use tracing::{debug, info};

use crate::{
    alphabet::ColorAlphabet,
    constants::{COLOR_CODE_LEN, keys},
    error::{Error, Result},
    prefs::{PrefValue, PreferenceStore},
};

/// Restore the persisted pairing identity, or derive and persist a new one
///
/// # Errors
///
/// - [`Error::StoreUnavailable`] if the store cannot be read or written
/// - [`Error::InvalidState`] if `ap_name` is present but `ap_color` or
///   `ap_color_code` is missing or has the wrong type
///
/// # Examples
///
/// ```
/// use cyberware_core::{ColorAlphabet, MemoryStore, pairing};
/// use rand_core::{RngCore, impls};
///
/// // Always draws index 3 ("G")
/// struct Threes;
/// impl RngCore for Threes {
///     fn next_u32(&mut self) -> u32 { 3 }
///     fn next_u64(&mut self) -> u64 { impls::next_u64_via_u32(self) }
///     fn fill_bytes(&mut self, d: &mut [u8]) { impls::fill_bytes_via_next(self, d) }
///     fn try_fill_bytes(&mut self, d: &mut [u8]) -> Result<(), rand_core::Error> {
///         self.fill_bytes(d);
///         Ok(())
///     }
/// }
///
/// let mut store = MemoryStore::new();
/// let identity = pairing::derive_or_restore(
///     &mut store,
///     &ColorAlphabet::new(),
///     &mut Threes,
///     "DISPLAY-0F889A",
/// ).unwrap();
///
/// assert_eq!(identity.ap_name, "DISPLAY-0F889A-GGG");
/// assert_eq!(store.flush_requests(), 1);
/// ```
pub fn derive_or_restore<S, R>(
    store: &mut S,
    alphabet: &ColorAlphabet,
    rng: &mut R,
    device_name: &str,
) -> Result<PairingIdentity>
where
    S: PreferenceStore + ?Sized,
    R: RngCore + ?Sized,
{
    if let Some(identity) = restore(&*store)? {
        info!(
            ap_name = %identity.ap_name,
            ap_color_code = %identity.ap_color_code,
            "Restored pairing identity"
        );
        return Ok(identity);
    }

    let identity = compose(alphabet, rng, device_name);
    persist(store, &identity)?;

    info!(
        ap_name = %identity.ap_name,
        ap_color_code = %identity.ap_color_code,
        "Derived new pairing identity"
    );

    Ok(identity)
}

/// Read the persisted pairing identity
///
/// Returns `Ok(None)` when no `ap_name` has been stored yet.
pub fn restore<S: PreferenceStore + ?Sized>(store: &S) -> Result<Option<PairingIdentity>> {
    let Some(name) = store.get(keys::AP_NAME)? else {
        debug!("No persisted pairing identity");
        return Ok(None);
    };

    let ap_name = into_text(keys::AP_NAME, name)?;

    let ap_color = match store.get(keys::AP_COLOR)? {
        Some(PrefValue::Colors(colors)) => colors,
        Some(other) => return Err(mistyped(keys::AP_COLOR, "colors", &other)),
        None => return Err(missing(keys::AP_COLOR)),
    };

    let ap_color_code = match store.get(keys::AP_COLOR_CODE)? {
        Some(value) => into_text(keys::AP_COLOR_CODE, value)?,
        None => return Err(missing(keys::AP_COLOR_CODE)),
    };

    Ok(Some(PairingIdentity::new(ap_name, ap_color, ap_color_code)))
}

/// Draw a fresh pairing identity without touching any store
///
/// Consumes exactly [`COLOR_CODE_LEN`] draws from `rng`.
pub fn compose<R: RngCore + ?Sized>(
    alphabet: &ColorAlphabet,
    rng: &mut R,
    device_name: &str,
) -> PairingIdentity {
    let picks: [ColorEntry; COLOR_CODE_LEN] =
        std::array::from_fn(|_| alphabet.pick_random(&mut *rng));

    let ap_color: [Rgb; COLOR_CODE_LEN] = picks.map(|e| e.color);
    let ap_color_code: String = picks.iter().map(|e| e.glyph).collect();

    PairingIdentity::new(format!("{}-{}", device_name, ap_color_code), ap_color, ap_color_code)
}

fn persist<S: PreferenceStore + ?Sized>(store: &mut S, identity: &PairingIdentity) -> Result<()> {
    store.set(keys::AP_COLOR, PrefValue::Colors(identity.ap_color))?;
    store.set(keys::AP_COLOR_CODE, PrefValue::Text(identity.ap_color_code.clone()))?;
    store.set(keys::AP_NAME, PrefValue::Text(identity.ap_name.clone()))?;

    store.request_flush();

    debug!("Pairing identity written, flush requested");

    Ok(())
}

fn into_text(key: &str, value: PrefValue) -> Result<String> {
    match value {
        PrefValue::Text(text) => Ok(text),
        other => Err(mistyped(key, "text", &other)),
    }
}

fn missing(key: &str) -> Error {
    Error::InvalidState(format!("'{}' is set but '{}' is missing", keys::AP_NAME, key))
}

fn mistyped(key: &str, expected: &str, actual: &PrefValue) -> Error {
    Error::InvalidState(format!(
        "'{}' holds {}, expected {}",
        key,
        actual.kind(),
        expected
    ))
}
