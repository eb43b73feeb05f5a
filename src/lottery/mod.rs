//! Weighted prize lottery.
//!
//! A draw costs a fixed number of achievement points and samples one prize
//! from a categorical distribution over an explicit caller-owned generator,
//! so callers control reproducibility.

use anyhow::{bail, Context, Result};
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Points one draw costs.
pub const TICKET_COST: u32 = 100;

/// One prize in the pool, with its sampling weight.
#[derive(Debug, Clone, Copy)]
pub struct Prize {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: f64,
}

/// Launch prize pool, most common first.
pub const PRIZE_POOL: [Prize; 4] = [
    Prize {
        id: "digital_stamp_A",
        label: "Hidden Digital Stamp A",
        weight: 0.5,
    },
    Prize {
        id: "digital_stamp_B",
        label: "Hidden Digital Stamp B",
        weight: 0.3,
    },
    Prize {
        id: "full_physical_set",
        label: "Full Physical Stamp Set",
        weight: 0.15,
    },
    Prize {
        id: "full_physical_set_seed",
        label: "Full Set + Dream Seed Bottle",
        weight: 0.05,
    },
];

/// Result of a successful draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub prize_id: String,
    pub prize_label: String,
    pub points_spent: u32,
    pub points_remaining: u32,
}

/// Samples one prize from the pool.
pub fn draw_prize<R: Rng + ?Sized>(rng: &mut R) -> Result<&'static Prize> {
    let dist = WeightedIndex::new(PRIZE_POOL.iter().map(|p| p.weight))
        .context("Prize pool weights must be positive")?;
    Ok(&PRIZE_POOL[dist.sample(rng)])
}

/// Runs one draw for a user holding `points` achievement points.
///
/// Insufficient points is an error rather than a soft status, so callers
/// cannot accidentally record a draw that never happened.
pub fn run_draw<R: Rng + ?Sized>(
    points: u32,
    ticket_cost: u32,
    rng: &mut R,
) -> Result<DrawOutcome> {
    if points < ticket_cost {
        bail!("Not enough points for a lottery draw: have {points}, need {ticket_cost}");
    }
    let prize = draw_prize(rng)?;
    Ok(DrawOutcome {
        prize_id: prize.id.to_string(),
        prize_label: prize.label.to_string(),
        points_spent: ticket_cost,
        points_remaining: points - ticket_cost,
    })
}
