//! The fixed catalog of VSEPR electron-domain geometries.
//!
//! Every entry is addressed by a [`ShapeKey`] (domain count plus lone-pair
//! count) whose text form `"{domains}_{lone_pairs}"` is the stable identifier
//! shared with selection UIs. The catalog is built once per process and is
//! read-only afterwards; see [`Catalog::global`].

mod entries;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::VseprError;

/// Radius of the shell on which all catalog domain positions lie.
pub const SHELL_RADIUS: f32 = 2.5;

/// Smallest and largest supported electron-domain counts.
pub const DOMAIN_COUNT_RANGE: std::ops::RangeInclusive<u8> = 2..=6;

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::standard);

/// Addressing key for a catalog entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct ShapeKey {
    /// Total number of electron domains around the central atom.
    pub domain_count: u8,
    /// How many of those domains are lone pairs.
    pub lone_pairs: u8,
}

impl ShapeKey {
    /// Build a key without validating it against the catalog.
    #[must_use]
    pub const fn new(domain_count: u8, lone_pairs: u8) -> Self {
        Self {
            domain_count,
            lone_pairs,
        }
    }
}

impl fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.domain_count, self.lone_pairs)
    }
}

impl FromStr for ShapeKey {
    type Err = VseprError;

    /// Parse `"{domains}_{lone_pairs}"`, exactly as [`Display`](fmt::Display)
    /// writes it: plain decimal digits, no sign, no leading zeros and no
    /// surrounding whitespace. The domain count must lie in
    /// [`DOMAIN_COUNT_RANGE`] and cannot be exceeded by the lone pairs;
    /// whether the combination is actually catalogued is a separate
    /// question answered by [`Catalog::lookup`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VseprError::InvalidKey(s.to_owned());
        let (domains, lone_pairs) = s.split_once('_').ok_or_else(invalid)?;
        let domain_count = parse_count(domains).ok_or_else(invalid)?;
        let lone_pairs = parse_count(lone_pairs).ok_or_else(invalid)?;
        if !DOMAIN_COUNT_RANGE.contains(&domain_count) || lone_pairs > domain_count
        {
            return Err(invalid());
        }
        Ok(Self::new(domain_count, lone_pairs))
    }
}

/// A canonical decimal count: digits only, and `"0"` is the only form
/// allowed to start with zero.
fn parse_count(text: &str) -> Option<u8> {
    let canonical = !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'));
    if canonical {
        text.parse().ok()
    } else {
        None
    }
}

impl From<ShapeKey> for String {
    fn from(key: ShapeKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for ShapeKey {
    type Error = VseprError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What occupies an electron domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    /// A bonding pair terminating in a ligand atom.
    BondedPair,
    /// A non-bonding lone pair.
    LonePair,
}

/// A single electron domain: a direction from the central atom and what
/// occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectronDomain {
    /// Position on the domain shell, relative to the central atom.
    pub position: Vec3,
    /// Bonded pair or lone pair.
    pub kind: DomainKind,
}

impl ElectronDomain {
    /// A bonded-pair domain at `(x, y, z)`.
    #[must_use]
    pub const fn bonded(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            kind: DomainKind::BondedPair,
        }
    }

    /// A lone-pair domain at `(x, y, z)`.
    #[must_use]
    pub const fn lone_pair(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            kind: DomainKind::LonePair,
        }
    }

    /// Whether this domain is a bonded pair.
    #[must_use]
    pub fn is_bonded(&self) -> bool {
        self.kind == DomainKind::BondedPair
    }
}

/// Molecular geometry family of a catalog entry.
///
/// The family, not the display name, drives every shape-specific decision
/// the scene generator makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    /// Two opposed bonds.
    Linear,
    /// Three bonds at 120° in a plane.
    TrigonalPlanar,
    /// Two bonds with one or more lone pairs.
    Bent,
    /// Four bonds at 109.5°.
    Tetrahedral,
    /// Three bonds and one lone pair on a tetrahedral frame.
    TrigonalPyramidal,
    /// Five bonds: three equatorial, two axial.
    TrigonalBipyramidal,
    /// Four bonds with one equatorial lone pair.
    Seesaw,
    /// Three bonds forming a T.
    TShaped,
    /// Six bonds along the coordinate axes.
    Octahedral,
    /// Five bonds with one axial lone pair.
    SquarePyramidal,
    /// Four bonds in a plane with two opposed lone pairs.
    SquarePlanar,
}

impl ShapeFamily {
    /// Human-readable family name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::TrigonalPlanar => "Trigonal Planar",
            Self::Bent => "Bent",
            Self::Tetrahedral => "Tetrahedral",
            Self::TrigonalPyramidal => "Trigonal Pyramidal",
            Self::TrigonalBipyramidal => "Trigonal Bipyramidal",
            Self::Seesaw => "Seesaw",
            Self::TShaped => "T-shaped",
            Self::Octahedral => "Octahedral",
            Self::SquarePyramidal => "Square Pyramidal",
            Self::SquarePlanar => "Square Planar",
        }
    }
}

/// A catalogued VSEPR shape (or a derived copy of one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Display name shown to users.
    pub display_name: String,
    /// Geometry family tag.
    pub family: ShapeFamily,
    /// Ordered electron domains.
    pub domains: Vec<ElectronDomain>,
}

impl ShapeDescriptor {
    /// Number of electron domains.
    #[must_use]
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    /// Number of lone-pair domains.
    #[must_use]
    pub fn lone_pair_count(&self) -> usize {
        self.domains.iter().filter(|d| !d.is_bonded()).count()
    }

    /// Number of bonded-pair domains.
    #[must_use]
    pub fn bonded_count(&self) -> usize {
        self.domains.iter().filter(|d| d.is_bonded()).count()
    }

    /// Whether every domain is a bonded pair. Only such shapes get angle
    /// annotations.
    #[must_use]
    pub fn is_all_bonded(&self) -> bool {
        self.domains.iter().all(ElectronDomain::is_bonded)
    }

    /// The key this descriptor would be filed under.
    #[must_use]
    pub fn key(&self) -> ShapeKey {
        ShapeKey::new(self.domain_count() as u8, self.lone_pair_count() as u8)
    }
}

/// Immutable mapping from [`ShapeKey`] to [`ShapeDescriptor`].
#[derive(Debug, Clone)]
pub struct Catalog {
    shapes: FxHashMap<ShapeKey, ShapeDescriptor>,
}

impl Catalog {
    /// Build the standard hand-authored catalog.
    #[must_use]
    pub fn standard() -> Self {
        let shapes = entries::standard_shapes()
            .into_iter()
            .map(|shape| (shape.key(), shape))
            .collect();
        Self { shapes }
    }

    /// The process-wide catalog, built on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Look up the shape filed under `key`.
    pub fn lookup(&self, key: ShapeKey) -> Result<&ShapeDescriptor, VseprError> {
        self.shapes.get(&key).ok_or(VseprError::UnknownShape(key))
    }

    /// Look up a shape by its domain and lone-pair counts.
    #[must_use]
    pub fn get(&self, domain_count: u8, lone_pairs: u8) -> Option<&ShapeDescriptor> {
        self.shapes.get(&ShapeKey::new(domain_count, lone_pairs))
    }

    /// All catalogued keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Vec<ShapeKey> {
        let mut keys: Vec<ShapeKey> = self.shapes.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterate entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeKey, &ShapeDescriptor)> {
        self.keys()
            .into_iter()
            .filter_map(move |key| {
                self.shapes.get(&key).map(|shape| (key, shape))
            })
    }

    /// Number of catalogued shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_matches_its_key() {
        let catalog = Catalog::global();
        assert_eq!(catalog.len(), 15);
        for (key, shape) in catalog.iter() {
            assert_eq!(
                shape.domain_count(),
                key.domain_count as usize,
                "{key}: domain count"
            );
            assert_eq!(
                shape.lone_pair_count(),
                key.lone_pairs as usize,
                "{key}: lone pairs"
            );
            assert_eq!(
                shape.bonded_count(),
                usize::from(key.domain_count - key.lone_pairs),
                "{key}: bonded pairs"
            );
            assert_eq!(shape.key(), key);
        }
    }

    #[test]
    fn positions_lie_near_the_shell() {
        for (key, shape) in Catalog::global().iter() {
            for domain in &shape.domains {
                let r = domain.position.length();
                assert!(
                    (r - SHELL_RADIUS).abs() < 0.01,
                    "{key}: |{}| = {r}",
                    domain.position
                );
            }
        }
    }

    #[test]
    fn keys_sort_like_their_text_form() {
        let keys = Catalog::global().keys();
        let mut text: Vec<String> = keys.iter().map(ToString::to_string).collect();
        let as_listed = text.clone();
        text.sort();
        assert_eq!(as_listed, text);
        assert_eq!(as_listed.first().map(String::as_str), Some("2_0"));
        assert_eq!(as_listed.last().map(String::as_str), Some("6_4"));
    }

    #[test]
    fn key_text_round_trip() {
        let key: ShapeKey = "5_2".parse().unwrap();
        assert_eq!(key, ShapeKey::new(5, 2));
        assert_eq!(key.to_string(), "5_2");
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for raw in ["", "4", "4-1", "a_b", "7_0", "1_0", "3_4", "4_1_0", "_1", "4_"] {
            assert!(
                matches!(raw.parse::<ShapeKey>(), Err(VseprError::InvalidKey(_))),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn keys_parse_only_in_display_form() {
        for raw in ["+4_1", "4_+1", "04_1", "4_01", " 4_1", "4_1 ", "4 _1", "\t4_1\n"] {
            assert!(
                matches!(raw.parse::<ShapeKey>(), Err(VseprError::InvalidKey(_))),
                "{raw:?} should not parse"
            );
        }
        // Zero lone pairs is written as a single digit.
        assert_eq!("6_0".parse::<ShapeKey>().unwrap(), ShapeKey::new(6, 0));
        for key in Catalog::global().keys() {
            assert_eq!(key.to_string().parse::<ShapeKey>().unwrap(), key);
        }
    }

    #[test]
    fn uncatalogued_key_is_not_found() {
        let key: ShapeKey = "2_1".parse().unwrap();
        assert!(matches!(
            Catalog::global().lookup(key),
            Err(VseprError::UnknownShape(k)) if k == key
        ));
        assert!(Catalog::global().get(6, 6).is_none());
    }

    #[test]
    fn six_domain_families() {
        let catalog = Catalog::global();
        let family = |lp| catalog.get(6, lp).map(|s| s.family);
        assert_eq!(family(0), Some(ShapeFamily::Octahedral));
        assert_eq!(family(1), Some(ShapeFamily::SquarePyramidal));
        assert_eq!(family(2), Some(ShapeFamily::SquarePlanar));
        assert_eq!(family(3), Some(ShapeFamily::TShaped));
        assert_eq!(family(4), Some(ShapeFamily::Linear));
    }

    #[test]
    fn linear_shape_has_axial_domains() {
        let linear = Catalog::global().get(2, 0).unwrap();
        assert_eq!(linear.family, ShapeFamily::Linear);
        assert!(linear.is_all_bonded());
        assert_eq!(linear.domains[0].position, Vec3::new(0.0, 0.0, 2.5));
        assert_eq!(linear.domains[1].position, Vec3::new(0.0, 0.0, -2.5));
    }

    #[test]
    fn key_serializes_as_text() {
        let json = serde_json::to_string(&ShapeKey::new(4, 1)).unwrap();
        assert_eq!(json, "\"4_1\"");
        let parsed: ShapeKey = serde_json::from_str("\"6_3\"").unwrap();
        assert_eq!(parsed, ShapeKey::new(6, 3));
    }
}
