use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A `{ name, url }` reference as returned throughout the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One record of the `/pokemon?limit=N` listing.
pub type ListingEntry = NamedResource;

/// Wraps a listing response. `next` and `previous` are carried exactly as
/// returned by the API; the catalog never follows them.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ListingEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    base_experience: Option<u32>,
    types: Vec<TypeSlot>,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    #[serde(default)]
    stats: Vec<StatSlot>,
    #[serde(default)]
    moves: Vec<MoveSlot>,
}

#[derive(Debug, Clone, Deserialize)]
struct TypeSlot {
    slot: u8,
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Sprites {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct StatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct MoveSlot {
    #[serde(rename = "move")]
    move_info: NamedResource,
}

// ---------------------------------------------------------------------------
// Type tags
// ---------------------------------------------------------------------------

/// Categorical label attached to an entry (one or two per entry).
///
/// Declaration order is the order type filters are offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl TypeTag {
    pub const ALL: [TypeTag; 18] = [
        TypeTag::Normal,
        TypeTag::Fire,
        TypeTag::Water,
        TypeTag::Electric,
        TypeTag::Grass,
        TypeTag::Ice,
        TypeTag::Fighting,
        TypeTag::Poison,
        TypeTag::Ground,
        TypeTag::Flying,
        TypeTag::Psychic,
        TypeTag::Bug,
        TypeTag::Rock,
        TypeTag::Ghost,
        TypeTag::Dragon,
        TypeTag::Dark,
        TypeTag::Steel,
        TypeTag::Fairy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Normal => "normal",
            TypeTag::Fire => "fire",
            TypeTag::Water => "water",
            TypeTag::Electric => "electric",
            TypeTag::Grass => "grass",
            TypeTag::Ice => "ice",
            TypeTag::Fighting => "fighting",
            TypeTag::Poison => "poison",
            TypeTag::Ground => "ground",
            TypeTag::Flying => "flying",
            TypeTag::Psychic => "psychic",
            TypeTag::Bug => "bug",
            TypeTag::Rock => "rock",
            TypeTag::Ghost => "ghost",
            TypeTag::Dragon => "dragon",
            TypeTag::Dark => "dark",
            TypeTag::Steel => "steel",
            TypeTag::Fairy => "fairy",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| format!("unknown type tag {s:?}"))
    }
}

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    /// Base value, 0–255 by convention.
    pub base: u16,
}

/// One creature's complete record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    /// Decimeters.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub base_experience: u32,
    pub types: Vec<TypeTag>,
    /// Default front sprite URL.
    pub sprite: Option<String>,
    pub abilities: Vec<Ability>,
    pub stats: Vec<Stat>,
    pub moves: Vec<String>,
}

impl CatalogEntry {
    pub fn has_type(&self, tag: TypeTag) -> bool {
        self.types.contains(&tag)
    }
}

impl PokemonResponse {
    /// Convert to a [`CatalogEntry`], rejecting unknown or missing types.
    pub(crate) fn into_entry(self) -> Result<CatalogEntry, String> {
        let mut slots = self.types;
        slots.sort_by_key(|s| s.slot);
        let types = slots
            .iter()
            .map(|s| s.type_info.name.parse::<TypeTag>())
            .collect::<Result<Vec<_>, _>>()?;
        if types.is_empty() {
            return Err(format!("entry {} has no types", self.id));
        }

        Ok(CatalogEntry {
            id: self.id,
            name: self.name,
            height: self.height,
            weight: self.weight,
            base_experience: self.base_experience.unwrap_or(0),
            types,
            sprite: self.sprites.front_default,
            abilities: self
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    hidden: a.is_hidden,
                })
                .collect(),
            stats: self
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    base: s.base_stat,
                })
                .collect(),
            moves: self.moves.into_iter().map(|m| m.move_info.name).collect(),
        })
    }
}
