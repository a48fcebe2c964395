//! santa-match - Demo Binary
//!
//! Runs the pairing engine over a sample roster: three households, one year
//! of history, reciprocal pairs disallowed. Prints the search trace and the
//! resulting assignments.

use rand::thread_rng;

use santa_match::{
    assign_with_retries, Group, History, MatchObserver, MatchingEngine, Participant, Roster,
    TraceEvent, DEFAULT_MAX_ATTEMPTS,
};

/// Observer that prints each search step.
struct PrintObserver;

impl MatchObserver for PrintObserver {
    fn on_event(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Considering { giver, candidates } => {
                let names: Vec<&str> = candidates.iter().map(|c| c.name()).collect();
                println!("  {} may draw: {:?}", giver, names);
            }
            TraceEvent::Assigned { giver, recipient } => {
                println!("  {} draws {}", giver, recipient);
            }
            TraceEvent::DeadEnd { giver } => {
                println!("  {} has no one left to draw", giver);
            }
            TraceEvent::Backtracked { giver, returned } => {
                println!("  undo: {} gives {} back to the hat", giver, returned);
            }
        }
    }
}

fn main() {
    println!("===========================================");
    println!("  santa-match - Secret Santa pairing");
    println!("===========================================");
    println!();

    let participants = vec![
        Participant::new("Alice"),
        Participant::new("Bob"),
        Participant::new("Carol"),
        Participant::new("Dan"),
        Participant::new("Erin"),
        Participant::new("Frank"),
    ];
    let households = [
        Group::new([Participant::new("Alice"), Participant::new("Bob")]),
        Group::new([Participant::new("Carol"), Participant::new("Dan")]),
    ];

    // Last year's round, fed back in so nobody repeats.
    let mut history = History::new();
    history.record(Participant::new("Alice"), Participant::new("Carol"));
    history.record(Participant::new("Carol"), Participant::new("Erin"));
    history.record(Participant::new("Erin"), Participant::new("Bob"));

    let roster = match Roster::new(participants, &households, &history) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("Bad configuration: {err}");
            std::process::exit(1);
        }
    };

    println!("Participants: {}", roster.len());
    println!("Households:   {}", households.len());
    println!();

    // Traced run over the unshuffled order, to show the search at work.
    println!("Search trace (fixed order):");
    let order: Vec<usize> = (0..roster.len()).collect();
    let engine = MatchingEngine::new();
    let _ = engine.assign_observed(&roster, &order, false, &mut PrintObserver);
    println!();

    // The real draw: shuffled order, retried until a valid pairing lands.
    println!("Drawing names...");
    match assign_with_retries(&roster, false, &mut thread_rng(), DEFAULT_MAX_ATTEMPTS) {
        Ok(pairing) => {
            println!();
            for pair in &pairing {
                println!("  {pair}");
            }
        }
        Err(err) => {
            eprintln!("No valid assignment: {err}");
            std::process::exit(1);
        }
    }
}
