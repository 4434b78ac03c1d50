// Two security tiers: public (no auth) and protected (bearer JWT).
pub mod protected;
pub mod public;
