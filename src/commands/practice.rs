//! Practice session setup shared by the simple and TUI game modes

use crate::game::{Game, PracticeEntry};
use crate::practice::{Source, prepare_queue, seed_words};
use crate::segment::HeuristicSegmenter;
use crate::service::AnalysisService;
use crate::store::Store;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A game ready to play and how it was obtained
#[derive(Debug)]
pub struct LoadedGame {
    pub game: Game,
    pub resumed: bool,
    /// Words whose gold segmentation did not come from the service
    pub fallbacks: usize,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

/// Prepare a fresh queue from the saved selection (or the seed words)
pub fn prepare_practice<S, R>(
    store: &Store,
    service: &S,
    segmenter: &HeuristicSegmenter,
    rng: &mut R,
    show_progress: bool,
) -> (Vec<PracticeEntry>, usize)
where
    S: AnalysisService + ?Sized,
    R: Rng,
{
    let selected = store.selected_words();
    let len = if selected.is_empty() {
        seed_words().len()
    } else {
        selected.len()
    };
    let pb = progress_bar(len, show_progress);
    let fallbacks = AtomicUsize::new(0);

    let queue = prepare_queue(&selected, service, segmenter, rng, |prepared| {
        if prepared.source != Source::Service {
            fallbacks.fetch_add(1, Ordering::Relaxed);
        }
        pb.inc(1);
        pb.set_message(prepared.entry.word.clone());
    });
    pb.finish_with_message("Ready!");

    (queue, fallbacks.into_inner())
}

/// Resume the saved session if there is one, otherwise prepare a new game
pub fn load_game<S, R>(
    store: &Store,
    service: &S,
    segmenter: &HeuristicSegmenter,
    rng: &mut R,
    show_progress: bool,
) -> LoadedGame
where
    S: AnalysisService + ?Sized,
    R: Rng,
{
    if let Some(game) = store.session().and_then(Game::resume) {
        log::info!("resuming session at trial {}", game.index() + 1);
        return LoadedGame {
            game,
            resumed: true,
            fallbacks: 0,
        };
    }

    let (queue, fallbacks) = prepare_practice(store, service, segmenter, rng, show_progress);
    LoadedGame {
        game: Game::new(queue),
        resumed: false,
        fallbacks,
    }
}

/// Save the snapshot while a trial exists, otherwise clear it
pub fn persist_session(store: &mut Store, game: &Game) {
    match game.snapshot() {
        Some(snapshot) => store.save_session(&snapshot),
        None => store.clear_session(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;
    use crate::game::GameState;
    use crate::service::OfflineService;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fresh_game_from_selection() {
        let mut store = Store::in_memory();
        store.set_selected_words(&["unhappy".to_string(), "rebuild".to_string()]);
        let mut rng = StdRng::seed_from_u64(1);

        let loaded = load_game(
            &store,
            &OfflineService,
            &HeuristicSegmenter::default(),
            &mut rng,
            false,
        );
        assert!(!loaded.resumed);
        assert_eq!(loaded.fallbacks, 2);
        assert_eq!(loaded.game.queue().len(), 2);
        assert_eq!(loaded.game.state(), GameState::Ready);
    }

    #[test]
    fn saved_session_is_resumed() {
        let mut store = Store::in_memory();
        let mut rng = StdRng::seed_from_u64(1);
        let segmenter = HeuristicSegmenter::default();

        let mut loaded = load_game(&store, &OfflineService, &segmenter, &mut rng, false);
        persist_session(&mut store, &loaded.game);
        assert!(store.session().is_none());

        loaded.game.start(&mut rng).unwrap();
        let gold_root = loaded.game.entry().unwrap().morphemes[1].text().to_string();
        let tile = loaded
            .game
            .trial()
            .unwrap()
            .tiles()
            .iter()
            .find(|t| t.text() == gold_root)
            .unwrap()
            .id
            .clone();
        loaded.game.place(Role::Root, &tile).unwrap();
        persist_session(&mut store, &loaded.game);

        let resumed = load_game(&store, &OfflineService, &segmenter, &mut rng, false);
        assert!(resumed.resumed);
        assert_eq!(resumed.game.state(), GameState::InTrial);
        assert!(resumed.game.trial().unwrap().placed(Role::Root).is_some());
    }
}
