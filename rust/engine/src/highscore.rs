/// Best score credited for a win that left the session at `score_after`.
///
/// The winning guess is charged before the session settles, so the value
/// the player actually saw (and the one worth recording) is one higher.
pub fn candidate_best(score_after: u32) -> u32 {
    score_after + 1
}

/// Whether a fresh win may overwrite the stored best score.
///
/// Ties overwrite, and an absent or unreadable stored value never blocks:
/// the first win of a profile always lands.
pub fn qualifies(stored: Option<u32>, candidate: u32) -> bool {
    match stored {
        None => true,
        Some(best) => candidate >= best,
    }
}
