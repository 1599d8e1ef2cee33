use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::object::GameObject;
use crate::testutil::{Op, RecordingCanvas};

/// Logs every lifecycle hook it receives, in order.
struct Lifecycle {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl GameObject for Lifecycle {
    fn layer(&self) -> i32 {
        0
    }

    fn start(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        self.log.borrow_mut().push("start");
        Ok(())
    }

    fn update(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        self.log.borrow_mut().push("update");
        Ok(())
    }

    fn draw(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        self.log.borrow_mut().push("draw");
        Ok(())
    }
}

/// Fails its update hook.
struct FailingUpdate;

impl GameObject for FailingUpdate {
    fn layer(&self) -> i32 {
        0
    }

    fn update(&mut self, _ctx: &mut dyn Canvas2d) -> Result<(), CanvasError> {
        Err(CanvasError::Object("update exploded".to_owned()))
    }
}

// =============================================================
// Frame sequence
// =============================================================

#[test]
fn frame_runs_start_then_update_then_draw() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new("black");
    scene.add(Lifecycle { log: Rc::clone(&log) });

    let mut ctx = RecordingCanvas::new(100.0, 100.0);
    run_frame(&mut scene, &mut ctx).unwrap();

    assert_eq!(*log.borrow(), vec!["start", "update", "draw"]);
}

#[test]
fn start_gates_itself_across_frames() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new("black");
    scene.add(Lifecycle { log: Rc::clone(&log) });

    let mut ctx = RecordingCanvas::new(100.0, 100.0);
    run_frame(&mut scene, &mut ctx).unwrap();
    run_frame(&mut scene, &mut ctx).unwrap();

    assert_eq!(
        *log.borrow(),
        vec!["start", "update", "draw", "update", "draw"],
        "start runs on the first frame only"
    );
    assert!(scene.has_started());
}

#[test]
fn frame_renders_to_the_surface() {
    let mut scene = Scene::new("teal");
    let mut ctx = RecordingCanvas::new(320.0, 240.0);
    run_frame(&mut scene, &mut ctx).unwrap();

    assert_eq!(ctx.ops[0], Op::SetFillStyle("teal".to_owned()));
    assert_eq!(ctx.ops[1], Op::FillRect(0.0, 0.0, 320.0, 240.0));
    assert_eq!(ctx.save_restore_balance(), 0);
}

// =============================================================
// Faults
// =============================================================

#[test]
fn faulting_update_abandons_the_frame_before_draw() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scene = Scene::new("black");
    scene.add(Lifecycle { log: Rc::clone(&log) });
    scene.add(FailingUpdate);

    let mut ctx = RecordingCanvas::new(100.0, 100.0);
    assert!(run_frame(&mut scene, &mut ctx).is_err());

    assert_eq!(*log.borrow(), vec!["start", "update"], "draw never runs");
}
