// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O for an interactive session.
use anyhow::{Result, bail};
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io;

use videopoker_eval::{Card, Hand};
use videopoker_game::{Config, Dealer, GameError, Outcome, Phase, Session};

/// Runs the session loop reading the player input until the player quits,
/// the input ends, or the bankroll is empty.
pub fn run<D, R, W>(session: &mut Session<D>, mut r: R, mut w: W) -> Result<()>
where
    D: Dealer,
    R: io::BufRead,
    W: io::Write,
{
    print_paytable(&mut w, session.config())?;

    loop {
        match session.phase() {
            Phase::Broke => {
                print_message(&mut w, "You're out of money!")?;
                break;
            }
            Phase::Betting => {
                let default_bet = session.config().default_bet;
                write!(
                    w,
                    "You have {}. Your bet [{default_bet}], q to quit: ",
                    session.bankroll()
                )?;
                w.flush()?;

                let Some(line) = read_line(&mut r)? else {
                    break;
                };

                if line.eq_ignore_ascii_case("q") {
                    break;
                }

                let bet = if line.is_empty() {
                    default_bet
                } else {
                    match line.parse() {
                        Ok(bet) => bet,
                        Err(e) => {
                            print_error(&mut w, &e)?;
                            continue;
                        }
                    }
                };

                match session.deal(bet) {
                    Ok(hand) => print_hand(&mut w, hand)?,
                    Err(e @ (GameError::ZeroBet | GameError::InsufficientFunds { .. })) => {
                        print_error(&mut w, &e)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Phase::Drawing => {
                write!(w, "Cards to discard (1-5), Enter to draw: ")?;
                w.flush()?;

                let Some(line) = read_line(&mut r)? else {
                    break;
                };

                if line.eq_ignore_ascii_case("q") {
                    break;
                }

                let discards = match parse_discards(&line) {
                    Ok(discards) => discards,
                    Err(e) => {
                        print_error(&mut w, &e)?;
                        continue;
                    }
                };

                for (pos, discard) in discards.iter().enumerate() {
                    if *discard {
                        session.toggle_hold(pos)?;
                    }
                }

                let outcome = session.draw()?;
                print_outcome(&mut w, &outcome)?;
            }
        }
    }

    w.flush()?;

    Ok(())
}

/// Parses 1-based card positions separated by spaces or commas.
fn parse_discards(line: &str) -> Result<[bool; Hand::SIZE]> {
    let mut discards = [false; Hand::SIZE];

    for token in line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        match token.parse::<usize>() {
            Ok(pos) if (1..=Hand::SIZE).contains(&pos) => discards[pos - 1] = true,
            _ => bail!("Invalid card position '{token}', expected 1 to {}", Hand::SIZE),
        }
    }

    Ok(discards)
}

fn read_line(r: &mut impl io::BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if r.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn print_paytable(w: &mut impl io::Write, config: &Config) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent("Video Poker -- Jacks or Better\n".bold().dark_green())
    )?;

    for (category, multiplier) in config.paytable.rows() {
        if multiplier > 0 {
            writeln!(w, "  {:<16}{multiplier:>4}", category.label())?;
        }
    }

    writeln!(w)?;

    Ok(())
}

fn print_hand(w: &mut impl io::Write, hand: &Hand) -> Result<()> {
    for (pos, card) in hand.iter().enumerate() {
        write!(w, " {}:", pos + 1)?;
        print_card(w, *card)?;
    }

    writeln!(w)?;

    Ok(())
}

fn print_card(w: &mut impl io::Write, card: Card) -> Result<()> {
    let text = format!("{}{} ", card.rank(), card.suit().symbol());
    let styled = if card.suit().is_red() {
        text.bold().red()
    } else {
        text.bold()
    };

    queue!(w, style::PrintStyledContent(styled))?;

    Ok(())
}

fn print_outcome(w: &mut impl io::Write, outcome: &Outcome) -> Result<()> {
    print_hand(w, &outcome.hand)?;
    writeln!(w, "{}", outcome.result)?;
    if outcome.result.is_winner() {
        print_message(w, &outcome.message())?;
    } else {
        writeln!(w, "{}", outcome.message())?;
    }
    writeln!(w)?;

    Ok(())
}

fn print_message(w: &mut impl io::Write, msg: &str) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent(msg.dark_green()),
        style::Print("\n")
    )?;

    Ok(())
}

fn print_error(w: &mut impl io::Write, err: &dyn std::fmt::Display) -> Result<()> {
    queue!(
        w,
        style::PrintStyledContent(err.to_string().red()),
        style::Print("\n")
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use videopoker_eval::CardsError;
    use videopoker_game::{Chips, DeckDealer};

    struct StackedDealer(VecDeque<Card>);

    impl StackedDealer {
        fn new(cards: &str) -> Self {
            Self(cards.split_whitespace().map(|c| c.parse().unwrap()).collect())
        }
    }

    impl Dealer for StackedDealer {
        fn shuffle(&mut self) {}

        fn deal(&mut self) -> Result<Card, GameError> {
            self.0.pop_front().ok_or(GameError::Cards(CardsError::EmptyDeck))
        }
    }

    fn play<D: Dealer>(session: &mut Session<D>, input: &str) -> String {
        let mut out = Vec::new();
        run(session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn discards_parsing() {
        assert_eq!(parse_discards("").unwrap(), [false; 5]);
        assert_eq!(
            parse_discards("1 3,5").unwrap(),
            [true, false, true, false, true]
        );
        assert_eq!(
            parse_discards("2, 2").unwrap(),
            [false, true, false, false, false]
        );
        assert!(parse_discards("0").is_err());
        assert!(parse_discards("6").is_err());
        assert!(parse_discards("x").is_err());
    }

    #[test]
    fn play_winning_hand() {
        let dealer = StackedDealer::new("2S 7H 9D JC KS KH KD KC");
        let mut session = Session::new(Config::default(), dealer);

        let out = play(&mut session, "\n1 2 3\nq\n");
        assert!(out.contains("Jacks or Better"));
        assert!(out.contains("You have $100"));
        assert!(out.contains("Four Kings"));
        assert!(out.contains("Four of a Kind: Pays 25-to-1. You win $250"));
        assert!(out.contains("You have $340"));
        assert_eq!(session.bankroll(), Chips::new(340));
    }

    #[test]
    fn play_invalid_input() {
        let dealer = StackedDealer::new("QS QH 2D 7C 9S");
        let mut session = Session::new(Config::default(), dealer);

        let out = play(&mut session, "abc\n0\n500\n10\n6\n\nq\n");
        assert!(out.contains("does not contain a legal integer!"));
        assert!(out.contains("The bet amount must be greater than zero!"));
        assert!(out.contains("You don't have that much money"));
        assert!(out.contains("Invalid card position '6'"));
        assert!(out.contains("Pair, Jacks or better: You win even money."));
        assert_eq!(session.bankroll(), Chips::new(100));
        assert_eq!(session.phase(), Phase::Betting);
    }

    #[test]
    fn play_until_broke() {
        let config = Config {
            start_amount: Chips::new(10),
            ..Config::default()
        };
        let mut session = Session::new(config, StackedDealer::new("2S 7H 9D JC KS"));

        let out = play(&mut session, "\n\n");
        assert!(out.contains("No hand. You lose your bet."));
        assert!(out.contains("You're out of money!"));
        assert_eq!(session.phase(), Phase::Broke);
    }

    #[test]
    fn play_ends_with_input() {
        let mut session = Session::new(Config::default(), DeckDealer::from_seed(11));

        let out = play(&mut session, "5\n");
        assert!(out.contains("You have $100"));
        assert_eq!(session.phase(), Phase::Drawing);
        assert_eq!(session.bankroll(), Chips::new(95));
    }
}
