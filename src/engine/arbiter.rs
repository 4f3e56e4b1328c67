//! Resolving simultaneous Middle-stack requests.
//!
//! All requests of one tick are collected before any is applied. Requests
//! are grouped by target stack in order of first appearance; a lone request
//! is granted, and a contested stack goes to one requester picked uniformly
//! at random. Losers simply try again next tick.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{ActionSource, GameRng, MiddleStackId, PlayerId};

/// One player's request for one Middle stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Request {
    pub player: PlayerId,
    pub target: MiddleStackId,
    pub source: ActionSource,
}

/// Requests of one tick; tables rarely seat more than eight.
pub type Requests = SmallVec<[Request; 8]>;

/// Pick the granted requests: exactly one per distinct target.
///
/// The RNG is only consumed for contested targets, in order of first
/// appearance, so the outcome is a pure function of the request order and
/// the RNG state.
///
/// ```
/// use nertz_sim::core::{ActionSource, GameRng, MiddleStackId, PlayerId};
/// use nertz_sim::engine::{arbitrate, Request};
///
/// let req = |p, t| Request {
///     player: PlayerId::new(p),
///     target: MiddleStackId::new(t),
///     source: ActionSource::Nertz,
/// };
/// let granted = arbitrate(&[req(0, 1), req(1, 2), req(2, 1)], &mut GameRng::new(3));
///
/// assert_eq!(granted.len(), 2);
/// assert!(granted.contains(&req(1, 2)));
/// ```
pub fn arbitrate(requests: &[Request], rng: &mut GameRng) -> Requests {
    let mut slots: FxHashMap<MiddleStackId, usize> = FxHashMap::default();
    let mut groups: SmallVec<[SmallVec<[usize; 4]>; 8]> = SmallVec::new();

    for (i, request) in requests.iter().enumerate() {
        let slot = *slots.entry(request.target).or_insert_with(|| {
            groups.push(SmallVec::new());
            groups.len() - 1
        });
        groups[slot].push(i);
    }

    groups
        .iter()
        .map(|members| {
            let winner = if members.len() == 1 {
                members[0]
            } else {
                let pick = members[rng.pick_index(members.len())];
                log::debug!(
                    "{} contested by {} players, granted to {}",
                    requests[pick].target,
                    members.len(),
                    requests[pick].player
                );
                pick
            };
            requests[winner]
        })
        .collect()
}
