//! Tests for session event handling and change notifications.

use std::cell::RefCell;
use std::rc::Rc;

use rewind::{GameSession, Mark, Position, RenderFrame, SessionObserver, SortOrder, Square, UiEvent};

/// Observer that keeps every frame it is given.
#[derive(Clone, Default)]
struct Recorder {
    frames: Rc<RefCell<Vec<RenderFrame>>>,
}

impl SessionObserver for Recorder {
    fn on_change(&mut self, frame: &RenderFrame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}

fn recorded_session() -> (GameSession, Recorder) {
    let recorder = Recorder::default();
    let mut session = GameSession::new(SortOrder::Ascending);
    session.subscribe(Box::new(recorder.clone()));
    (session, recorder)
}

fn click_all(session: &mut GameSession, cells: &[usize]) {
    for cell in cells {
        assert!(session.handle(UiEvent::CellClicked(*cell)), "cell {} should be playable", cell);
    }
}

#[test]
fn test_win_scenario_publishes_each_move() {
    let (mut session, recorder) = recorded_session();

    session.handle(UiEvent::CellClicked(0));
    {
        let frames = recorder.frames.borrow();
        let first = frames.last().expect("frame published");
        assert_eq!(*first.cells()[0].square(), Square::Occupied(Mark::X));
        assert_eq!(first.status(), "Next player: O");
    }

    click_all(&mut session, &[3, 4, 5, 8]);

    let frames = recorder.frames.borrow();
    assert_eq!(frames.len(), 5);
    let last = frames.last().expect("frame published");
    assert_eq!(last.status(), "Winner: X");
    assert_eq!(
        last.winning_cells(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
}

#[test]
fn test_ignored_events_publish_nothing() {
    let (mut session, recorder) = recorded_session();
    click_all(&mut session, &[0, 3, 4, 5, 8]);
    assert_eq!(session.frame().status(), "Winner: X");
    let before = session.game().clone();

    assert!(!session.handle(UiEvent::CellClicked(0)), "occupied square");
    assert!(!session.handle(UiEvent::CellClicked(2)), "game already won");
    assert!(!session.handle(UiEvent::CellClicked(42)), "no such cell");
    assert!(!session.handle(UiEvent::HistoryJumpRequested(6)), "no such move");

    assert_eq!(session.game(), &before);
    assert_eq!(recorder.frames.borrow().len(), 5);
}

#[test]
fn test_split_diagonal_keeps_game_going() {
    let (mut session, recorder) = recorded_session();
    click_all(&mut session, &[0, 4, 1, 3, 8]);

    let frame = session.frame();
    assert_eq!(frame.status(), "Next player: O");
    assert!(frame.winning_cells().is_empty());
    assert_eq!(recorder.frames.borrow().len(), 5);

    assert!(session.handle(UiEvent::CellClicked(2)));
    assert_eq!(session.frame().status(), "Next player: X");
}

#[test]
fn test_jump_then_play_branches() {
    let (mut session, recorder) = recorded_session();
    click_all(&mut session, &[0, 4, 1, 3, 8]);

    assert!(session.handle(UiEvent::HistoryJumpRequested(2)));
    let board = session.game().current_board();
    assert_eq!(board.mark_count(), 2);
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Mark::O));
    assert_eq!(session.frame().status(), "Next player: X");
    assert!(session.frame().winning_cells().is_empty());

    assert!(session.handle(UiEvent::CellClicked(1)));
    assert_eq!(session.game().len(), 4);
    assert_eq!(session.game().current_move(), 3);

    let labels: Vec<String> = session
        .frame()
        .moves()
        .iter()
        .map(|m| m.label().clone())
        .collect();
    assert_eq!(
        labels,
        [
            "Go to game start",
            "Go to move #1: (1, 1)",
            "Go to move #2: (2, 2)",
            "You are at move #3: (1, 2)",
        ]
    );
    assert_eq!(recorder.frames.borrow().len(), 7);
}

#[test]
fn test_draw_scenario() {
    let (mut session, _recorder) = recorded_session();
    // X O X / X O O / O X X
    click_all(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(session.frame().status(), "Draw");
    assert!(session.frame().winning_cells().is_empty());
}

#[test]
fn test_sort_toggle_reverses_list_only() {
    let (mut session, recorder) = recorded_session();
    click_all(&mut session, &[4, 0]);
    let game_before = session.game().clone();

    assert!(session.handle(UiEvent::SortToggleRequested));
    let frame = session.frame();
    assert_eq!(*frame.sort_order(), SortOrder::Descending);
    assert_eq!(frame.toggle_label(), "Sort Ascending");
    let order: Vec<usize> = frame.moves().iter().map(|m| *m.move_number()).collect();
    assert_eq!(order, [2, 1, 0]);
    assert_eq!(session.game(), &game_before);

    assert!(session.handle(UiEvent::SortToggleRequested));
    assert_eq!(session.sort_order(), SortOrder::Ascending);
    assert_eq!(recorder.frames.borrow().len(), 4);
}

#[test]
fn test_restart_publishes_empty_board() {
    let (mut session, recorder) = recorded_session();
    click_all(&mut session, &[4]);
    session.restart();

    let frames = recorder.frames.borrow();
    let last = frames.last().expect("frame published");
    assert!(last.cells().iter().all(|c| *c.square() == Square::Empty));
    assert_eq!(last.moves().len(), 1);
}
