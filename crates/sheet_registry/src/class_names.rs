//! Deterministic class name generation.

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hasher as _;
use theme::ThemeFingerprint;

/// How generated class names are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NamingMode {
    /// Short hash of (component, slot): `w-3fa9c1`. The theme fingerprint is
    /// deliberately excluded so consumer selectors written against generated
    /// names stay stable across theme changes; only the rule text mapped to
    /// the name varies.
    #[default]
    Hashed,
    /// Embeds component and slot for diagnosability: `TileBar-root-3fa9c1`.
    /// Presentation-only; matching behavior is identical to `Hashed`.
    Debug,
}

#[derive(Debug, Default)]
struct NameTable {
    assigned: FxHashMap<(String, String), String>,
    taken: FxHashSet<String>,
}

/// Maps (component, slot) pairs to globally unique class identifiers.
///
/// The same pair always yields the same name within one generator. In
/// `Hashed` mode the name is also reproducible across processes unless a
/// short-hash collision forced a disambiguating suffix, in which case the
/// suffix assignment is recorded so later lookups for either pair stay
/// stable.
#[derive(Debug, Default)]
pub struct ClassNameGenerator {
    mode: NamingMode,
    table: Mutex<NameTable>,
}

impl ClassNameGenerator {
    pub fn new(mode: NamingMode) -> Self {
        Self {
            mode,
            table: Mutex::new(NameTable::default()),
        }
    }

    /// The generator's rendering mode.
    pub const fn mode(&self) -> NamingMode {
        self.mode
    }

    /// Class name for a slot of a component under a theme.
    pub fn name(&self, component: &str, slot: &str, fingerprint: ThemeFingerprint) -> String {
        let mut table = self.table.lock();
        if let Some(existing) = table.assigned.get(&(component.to_owned(), slot.to_owned())) {
            return existing.clone();
        }

        let short = short_hash(component, slot);
        let base = match self.mode {
            NamingMode::Hashed => format!("w-{short}"),
            NamingMode::Debug => format!("{component}-{slot}-{short}"),
        };

        let mut candidate = base.clone();
        let mut suffix = 2_u32;
        while table.taken.contains(&candidate) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        if candidate != base {
            log::warn!(
                "class name collision for {component}.{slot}, disambiguated as {candidate}"
            );
        }

        log::trace!("class {candidate} assigned to {component}.{slot} (theme {fingerprint})");
        table.taken.insert(candidate.clone());
        table
            .assigned
            .insert((component.to_owned(), slot.to_owned()), candidate.clone());
        candidate
    }
}

fn short_hash(component: &str, slot: &str) -> String {
    let mut hasher = rustc_hash::FxHasher::default();
    hasher.write(component.as_bytes());
    hasher.write_u8(0xff);
    hasher.write(slot.as_bytes());
    format!("{:06x}", hasher.finish() & 0xff_ffff)
}
