//! Stone element: immobile. Never empty or low-density, so nothing swaps
//! into it either.

pub fn update_stone(_api: &mut crate::api::SandApi) {}
