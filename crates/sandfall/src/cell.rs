//! Particle and Species types for the simulation grid.

use std::fmt;

use crate::dice::Dice;

/// Discriminant values are the ids used by the WASM host; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Species {
    Sand = 1,
    Stone = 2,
    Water = 3,
    Toxic = 4,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sand => write!(f, "Sand"),
            Self::Stone => write!(f, "Stone"),
            Self::Water => write!(f, "Water"),
            Self::Toxic => write!(f, "Toxic"),
        }
    }
}

impl Species {
    pub const ALL: [Species; 4] = [Self::Sand, Self::Stone, Self::Water, Self::Toxic];

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Sand),
            2 => Some(Self::Stone),
            3 => Some(Self::Water),
            4 => Some(Self::Toxic),
            _ => None,
        }
    }

    /// Host key binding: S sand, C stone, W water, T toxic.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            's' => Some(Self::Sand),
            'c' => Some(Self::Stone),
            'w' => Some(Self::Water),
            't' => Some(Self::Toxic),
            _ => None,
        }
    }

    #[must_use]
    pub fn base_color(self) -> Rgb {
        match self {
            Self::Sand => Rgb::new(150, 150, 40),
            Self::Stone => Rgb::new(120, 120, 120),
            Self::Water => Rgb::new(60, 100, 150),
            Self::Toxic => Rgb::new(30, 150, 30),
        }
    }

    /// Weight out of 100 that a neighbouring toxic converts this species.
    #[must_use]
    pub fn corrosion_chance(self) -> u32 {
        match self {
            Self::Sand | Self::Water => 10,
            Self::Stone => 3,
            Self::Toxic => 0,
        }
    }
}

/// Upper bound (inclusive) of the per-channel color jitter.
pub const COLOR_JITTER: u32 = 80;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`.
    #[must_use]
    pub fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    fn jittered(self, dice: &mut dyn Dice) -> Self {
        let mut channel = |c: u8| {
            let j = u8::try_from(dice.roll(COLOR_JITTER)).unwrap_or(u8::MAX);
            c.saturating_add(j)
        };
        let r = channel(self.r);
        let g = channel(self.g);
        let b = channel(self.b);
        Self { r, g, b }
    }
}

/// One particle. Its position is the cell that holds it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub species: Species,
    /// Generation stamp; the particle updates only while this equals the
    /// grid's current stamp.
    pub age: u32,
    pub velocity: f32,
    pub horizontal: f32,
    /// Last lateral move: -1, 0 or +1.
    pub direction: i32,
    pub low_density: bool,
    pub corrosion_chance: u32,
    pub color: Rgb,
}

/// A grid slot.
pub type Cell = Option<Particle>;

impl Particle {
    /// Fresh particle stamped with `age`, colored from the species base.
    pub fn new(species: Species, age: u32, dice: &mut dyn Dice) -> Self {
        Self {
            species,
            age,
            velocity: 0.0,
            horizontal: 0.0,
            direction: 0,
            low_density: species == Species::Water,
            corrosion_chance: species.corrosion_chance(),
            color: species.base_color().jittered(dice),
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.species)
    }
}
