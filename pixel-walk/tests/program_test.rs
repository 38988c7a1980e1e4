mod common;

use common::{cells, exec, exec_err, exec_n};
use pixel_walk::{Canvas, CanvasConfig, Color, Error, ErrorKind, Position, RuntimeError, run, run_on};

#[test]
fn test_red_line_scenario() {
    let outcome = exec("Spawn(0,0) Color(\"Red\") DrawLine(1,0,3)");
    assert_eq!(outcome.cursor(), Some(Position { x: 3, y: 0 }));
    assert_eq!(cells(&outcome.canvas, Color::Red), vec![(1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_color_count_after_line() {
    let outcome = exec(
        "Spawn(0,0) Color(\"Red\") DrawLine(1,0,3)
         n <- GetColorCount(\"Red\",0,0,3,0)
         GoTo[ok](n == 3)
         Color(\"Blue\") Fill()
         ok:",
    );
    assert!(cells(&outcome.canvas, Color::Blue).is_empty());
}

#[test]
fn test_deterministic() {
    let source = "
        Spawn(5, 5)
        Color(Purple)
        Size(3)
        k <- 0
        spiral:
        DrawLine(1, 0, k)
        DrawLine(0, 1, k)
        k <- k + 1
        GoTo[spiral](k < 6)
        DrawCircle(0, 0, 2)
    ";
    let first = exec_n(source, 20);
    let second = exec_n(source, 20);
    assert_eq!(first.canvas, second.canvas);
    assert_eq!(first.steps, second.steps);
}

#[test]
fn test_brush_width_follows_size() {
    for (requested, width) in [(1, 1), (2, 1), (3, 3), (4, 3), (5, 5), (0, 1), (-2, 1)] {
        let source = format!("Spawn(10, 10) Size({}) Color(\"Black\") DrawLine(0, 1, 1)", requested);
        let outcome = exec_n(&source, 21);
        let painted = cells(&outcome.canvas, Color::Black);
        assert_eq!(painted.len(), width * width, "Size({})", requested);
        let min_x = painted.iter().map(|&(x, _)| x).min().unwrap();
        let max_x = painted.iter().map(|&(x, _)| x).max().unwrap();
        assert_eq!(max_x - min_x + 1, width);
    }
}

#[test]
fn test_circle_points_near_radius() {
    for radius in 1..=6 {
        let source = format!("Spawn(10, 10) Color(\"Green\") DrawCircle(0, 0, {})", radius);
        let outcome = exec_n(&source, 21);
        let painted = cells(&outcome.canvas, Color::Green);
        for (x, y) in [(10 + radius, 10), (10 - radius, 10), (10, 10 + radius), (10, 10 - radius)] {
            assert!(painted.contains(&(x, y)), "radius {} misses ({}, {})", radius, x, y);
        }
        for &(x, y) in &painted {
            let (dx, dy) = (x as f64 - 10.0, y as f64 - 10.0);
            let distance = (dx * dx + dy * dy).sqrt();
            assert!((distance - radius as f64).abs() <= 1.0);
        }
        assert_eq!(outcome.cursor(), Some(Position { x: 10, y: 10 }));
    }
}

#[test]
fn test_circle_out_of_bounds_leaves_grid() {
    let mut canvas = Canvas::from_config(&CanvasConfig::default()).unwrap();
    let error = run_on(&mut canvas, "Spawn(0,0) Color(\"Red\") DrawCircle(-1, 0, 3)", None).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert!(matches!(
        error,
        Error::Runtime {
            statement: 2,
            source: RuntimeError::OutOfBounds { x: -3, y: 0 }
        }
    ));
    assert!(canvas.pixels().iter().all(|&pixel| pixel == Color::White));
    assert_eq!(canvas.cursor(), Some(Position { x: 0, y: 0 }));
}

#[test]
fn test_fill_twice_is_idempotent() {
    let source = "
        Spawn(1, 1)
        Color(\"Black\")
        DrawRectangle(1, 1, 2, 5, 5)
        Color(\"Orange\")
        Fill()
    ";
    let once = exec(source);
    let twice = exec(&format!("{} Fill()", source));
    assert_eq!(once.canvas, twice.canvas);
    // Курсор в центре контура 5×5, заливается только внутренность 3×3
    assert_eq!(cells(&once.canvas, Color::Orange).len(), 9);
}

#[test]
fn test_runaway_loop_is_bounded() {
    let error = exec_err("Spawn(0, 0) again: x <- 1 GoTo[again](1)");
    assert!(matches!(
        error,
        Error::Runtime {
            source: RuntimeError::StepLimitExceeded { .. },
            ..
        }
    ));
}

#[test]
fn test_loop_terminates_when_condition_changes() {
    let outcome = exec(
        "Spawn(0, 9)
         Color(\"Yellow\")
         step:
         DrawLine(1, -1, 1)
         GoTo[step](GetActualX() < 5)",
    );
    assert_eq!(outcome.cursor(), Some(Position { x: 5, y: 4 }));
    assert_eq!(cells(&outcome.canvas, Color::Yellow).len(), 5);
}

#[test]
fn test_must_start_with_spawn() {
    let error = exec_err("x <- 1 / 0 Spawn(0, 0)");
    assert_eq!(error.kind(), ErrorKind::Parse);
    assert!(error.message().contains("Spawn"));
}

#[test]
fn test_lex_error_kind() {
    let error = exec_err("Spawn(0, 0) x <- 3 # comment");
    assert_eq!(error.kind(), ErrorKind::Lex);
    assert!(matches!(error, Error::Lexer { found: '#', offset: 19, .. }));
}

#[test]
fn test_runtime_error_messages() {
    let cases = [
        ("Spawn(0, 0) y <- z", "Undefined variable: z"),
        ("Spawn(0, 0) Color(\"Teal\")", "Unknown color: Teal"),
        ("Spawn(0, 0) Color(Transparent)", "Transparent cannot be used as the brush color"),
        ("Spawn(10, 0)", "Position (10, 0) is outside the canvas"),
        ("Spawn(0, 0) DrawRectangle(0, 0, 0, 2, -1)", "Width and height must be greater than 0, got 2x-1"),
        ("Spawn(0, 0) DrawLine(0, 3, 1)", "Direction components must be -1, 0 or 1, got (0, 3)"),
        ("Spawn(0, 0) n <- GetActualX(1)", "Function 'GetActualX' takes 0 arguments, but 1 were given"),
        ("Spawn(0, 0) n <- IsBrushColor(7)", "Function 'IsBrushColor' expects a string as argument 1"),
        ("Spawn(0, 0) n <- Fill()", "Unknown function: Fill"),
        ("Spawn(0, 0) n <- 5 % 0", "Division by zero"),
    ];
    for (source, message) in cases {
        let error = exec_err(source);
        assert_eq!(error.kind(), ErrorKind::Runtime, "{}", source);
        assert_eq!(error.message(), message, "{}", source);
    }
}

#[test]
fn test_canvas_persists_across_runs() {
    let mut canvas = Canvas::new(6, Color::White).unwrap();
    run_on(&mut canvas, "Spawn(0, 0) Color(\"Red\") DrawLine(1, 0, 5)", None).unwrap();
    run_on(&mut canvas, "Spawn(0, 5) Color(\"Blue\") DrawLine(1, 0, 5)", None).unwrap();
    assert_eq!(cells(&canvas, Color::Red).len(), 5);
    assert_eq!(cells(&canvas, Color::Blue).len(), 5);

    canvas.clear();
    assert!(cells(&canvas, Color::Red).is_empty());
}

#[test]
fn test_huge_brush_and_radius_finish() {
    let outcome = exec("Spawn(0,0) Size(100001) Color(\"Red\") DrawLine(1,0,1)");
    assert_eq!(cells(&outcome.canvas, Color::Red).len(), 100);

    let outcome = exec("Spawn(5,5) Color(\"Blue\") DrawCircle(0,0,2000000000) Size(99) DrawCircle(0,0,2000000000)");
    assert!(cells(&outcome.canvas, Color::Blue).is_empty());
    assert_eq!(outcome.cursor(), Some(Position { x: 5, y: 5 }));
}

#[test]
fn test_failed_rectangle_keeps_visible_border() {
    let mut canvas = Canvas::new(10, Color::White).unwrap();
    let error = run_on(&mut canvas, "Spawn(0,0) Color(\"Red\") DrawRectangle(-1,0,1,3,3)", None).unwrap_err();
    assert_eq!(
        error,
        Error::Runtime {
            statement: 2,
            source: RuntimeError::OutOfBounds { x: -1, y: 0 },
        }
    );
    assert_eq!(cells(&canvas, Color::Red), vec![(0, 0), (0, 1)]);
}

#[test]
fn test_zero_sized_canvas_is_rejected() {
    let error = run("Spawn(0, 0)", &CanvasConfig::with_size(0)).unwrap_err();
    assert!(matches!(
        error,
        Error::Runtime {
            source: RuntimeError::InvalidCanvasSize { size: 0 },
            ..
        }
    ));
}

#[test]
fn test_introspection() {
    let outcome = exec(
        "Spawn(2, 3)
         Color(\"Red\")
         DrawLine(0, 1, 1)
         a <- GetActualX() * 10 + GetActualY()
         b <- IsCanvasColor(\"Red\", -1, 0) + IsCanvasColor(\"Red\", 0, 0) * 2
         c <- IsBrushColor(\"Red\") + GetCanvasSize()
         ok <- a == 24
         GoTo[fail](ok == 0)
         GoTo[fail](b != 2)
         GoTo[fail](c != 11)
         GoTo[done](true)
         fail:
         Color(\"Black\")
         Fill()
         done:",
    );
    assert!(cells(&outcome.canvas, Color::Black).is_empty());
}
