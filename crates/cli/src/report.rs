// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand evaluation and statistics reports.
use anyhow::Result;
use log::debug;
use std::{io, time::Instant};

use videopoker_eval::{Deck, EvalError, Hand, HandCategory, evaluate};
use videopoker_game::Paytable;

/// Evaluates the hand given as cards strings and prints its category.
pub fn eval(cards: &[String], paytable: &Paytable, mut w: impl io::Write) -> Result<()> {
    let hand = cards.join(" ").parse::<Hand>()?;
    let result = evaluate(&hand)?;
    let category = result.category();

    writeln!(w, "Hand:       {hand}")?;
    writeln!(w, "Category:   {} ({result})", category.label())?;
    writeln!(w, "Qualifying: {}", result.qualifying_value())?;
    writeln!(w, "Pays:       {}-to-1", paytable.multiplier(category))?;

    Ok(())
}

/// Evaluates all five cards hands and prints the frequency of each category
/// and the paytable return on the dealt hands.
pub fn stats(paytable: &Paytable, mut w: impl io::Write) -> Result<()> {
    let now = Instant::now();
    let counts = count_categories()?;
    let elapsed = now.elapsed().as_secs_f64();
    debug!("Evaluated all hands in {elapsed:.3}s");

    let total = counts.iter().sum::<usize>();
    writeln!(w, "Total hands:     {total}")?;
    writeln!(w, "Elapsed:         {elapsed:.3}s")?;
    writeln!(w, "Hands/sec:       {:.0}\n", total as f64 / elapsed)?;

    let mut paid = 0u64;
    for category in HandCategory::categories().rev() {
        let count = counts[category.ordinal()];
        let multiplier = paytable.multiplier(category);
        paid += count as u64 * multiplier as u64;

        writeln!(
            w,
            "{:<16} {:>9} {:>10.6}% {:>4}",
            category.label(),
            count,
            count as f64 * 100.0 / total as f64,
            multiplier
        )?;
    }

    writeln!(w, "\nReturn on dealt hands: {:.4}%", paid as f64 * 100.0 / total as f64)?;

    Ok(())
}

/// Counts the categories of all five cards hands.
fn count_categories() -> Result<[usize; 10], EvalError> {
    let mut counts = [0usize; 10];
    let mut error = None;

    Deck::default().for_each(5, |cards| {
        match Hand::new(cards).and_then(|hand| evaluate(&hand)) {
            Ok(res) => counts[res.category().ordinal()] += 1,
            Err(e) => {
                error.get_or_insert(e);
            }
        }
    });

    match error {
        Some(e) => Err(e),
        None => Ok(counts),
    }
}
