use super::*;
use crate::app::state::AppState;
use crate::domain::browser::MockBrowser;
use crate::domain::models::WeatherReport;
use crate::domain::store::{MemoryStore, THEME_KEY};
use crate::domain::weather::MockWeatherProvider;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

type EventTx = mpsc::Sender<Result<Event, std::io::Error>>;

fn sunny_weather() -> MockWeatherProvider {
    let mut weather = MockWeatherProvider::new();
    weather.expect_current().returning(|city| {
        Ok(WeatherReport {
            city: city.to_string(),
            temperature: 21.0,
            icon: "01d".to_string(),
            description: "ensoleillé".to_string(),
        })
    });
    weather
}

fn services(browser: MockBrowser) -> (Services, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let services = Services {
        store: store.clone(),
        weather: Arc::new(sunny_weather()),
        browser: Arc::new(browser),
    };
    (services, store)
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

async fn send(tx: &EventTx, event: Event) {
    tx.send(Ok(event)).await.unwrap();
}

async fn type_line(tx: &EventTx, line: &str) {
    for c in line.chars() {
        send(tx, key(KeyCode::Char(c), KeyModifiers::NONE)).await;
    }
    send(tx, key(KeyCode::Enter, KeyModifiers::NONE)).await;
}

/// Opens the overlay and waits out the focus delay.
async fn open_overlay(tx: &EventTx) {
    send(tx, key(KeyCode::Char('t'), KeyModifiers::ALT)).await;
    tokio::time::sleep(crate::app::state::INPUT_FOCUS_DELAY * 3).await;
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_plain_text_navigates_to_default_search() {
    let mut browser = MockBrowser::new();
    browser
        .expect_open()
        .with(mockall::predicate::eq(
            "https://www.google.com/search?q=hello%20world",
        ))
        .times(1)
        .returning(|_| Ok(()));
    let (services, _) = services(browser);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        open_overlay(&event_tx).await;
        type_line(&event_tx, "hello world").await;
        // Keep the channel open until the loop has exited on its own.
        event_tx.closed().await;
    });

    let exit = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, AppState::default(), services, event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();

    assert_eq!(
        exit,
        Exit::Navigated("https://www.google.com/search?q=hello%20world".to_string())
    );
    feeder.await.unwrap();
}

#[tokio::test]
async fn test_keys_before_focus_are_not_typed() {
    let mut browser = MockBrowser::new();
    browser
        .expect_open()
        .with(mockall::predicate::eq(
            "https://www.youtube.com/results?search_query=cats",
        ))
        .times(1)
        .returning(|_| Ok(()));
    let (services, _) = services(browser);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        // Typed immediately after the shortcut, before the input takes focus.
        send(&event_tx, key(KeyCode::Char('t'), KeyModifiers::ALT)).await;
        send(&event_tx, key(KeyCode::Char('x'), KeyModifiers::NONE)).await;
        tokio::time::sleep(crate::app::state::INPUT_FOCUS_DELAY * 3).await;
        type_line(&event_tx, "/yt cats").await;
        event_tx.closed().await;
    });

    let exit = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, AppState::default(), services, event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();

    assert!(matches!(exit, Exit::Navigated(_)));
    feeder.await.unwrap();
}

#[tokio::test]
async fn test_failed_navigation_keeps_overlay_open() {
    let mut browser = MockBrowser::new();
    browser
        .expect_open()
        .returning(|_| Err(anyhow::anyhow!("no opener")));
    let (services, _) = services(browser);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        open_overlay(&event_tx).await;
        type_line(&event_tx, "/wiki rust").await;
        tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        // Dropping the sender ends the session.
    });

    let exit = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, AppState::default(), services, event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();

    assert_eq!(exit, Exit::Quit);
    let text = screen(&terminal);
    assert!(text.contains("> /wiki rust"));
    assert!(text.contains("! could not open https://en.wikipedia.org/wiki/Special:Search?search=rust"));
    feeder.await.unwrap();
}

#[tokio::test]
async fn test_help_clear_and_quit() {
    let (services, _) = services(MockBrowser::new());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        open_overlay(&event_tx).await;
        type_line(&event_tx, "/help").await;
        type_line(&event_tx, "/clear").await;
        type_line(&event_tx, "/help").await;
        send(&event_tx, key(KeyCode::Char('T'), KeyModifiers::ALT)).await;
        send(&event_tx, key(KeyCode::Char('q'), KeyModifiers::NONE)).await;
        event_tx.closed().await;
    });

    let exit = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, AppState::default(), services, event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();

    assert_eq!(exit, Exit::Quit);
    feeder.await.unwrap();
}

#[tokio::test]
async fn test_theme_toggle_is_persisted() {
    let (services, store) = services(MockBrowser::new());
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let feeder = tokio::spawn(async move {
        send(&event_tx, key(KeyCode::Char('t'), KeyModifiers::NONE)).await;
        send(&event_tx, key(KeyCode::Char('q'), KeyModifiers::NONE)).await;
        event_tx.closed().await;
    });

    let exit = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, AppState::default(), services, event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();

    assert_eq!(exit, Exit::Quit);
    assert_eq!(
        crate::domain::store::KeyValueStore::get(store.as_ref(), THEME_KEY).as_deref(),
        Some("light")
    );
    feeder.await.unwrap();
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    // Failed opens keep the session alive, so every event reaches the loop.
    let mut browser = MockBrowser::new();
    browser
        .expect_open()
        .returning(|_| Err(anyhow::anyhow!("no opener")));
    let (services, _) = services(browser);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut sent = 0;
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            sent += 1;
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Dropping the sender ends the session.
        sent
    });

    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, services, event_rx),
    )
    .await;

    match result {
        Ok(res) => {
            assert_eq!(res.unwrap(), Exit::Quit);
        }
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    assert_eq!(fuzzer_handle.await.unwrap(), 10000);
}

#[test]
fn test_failed_navigation_is_recorded_without_the_action_channel() {
    let mut browser = MockBrowser::new();
    browser
        .expect_open()
        .returning(|_| Err(anyhow::anyhow!("no opener")));
    let (services, _) = services(browser);
    let mut state = AppState::default();

    let exit = navigate(&mut state, &services, "https://x.test".to_string());

    assert_eq!(exit, None);
    assert_eq!(
        state.terminal.output.lines(),
        ["! could not open https://x.test: no opener"]
    );
    assert!(state.last_error.is_some());
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    // A bare `q` quits; the session has to outlive the whole run.
    if code == KeyCode::Char('q') && modifiers.is_empty() {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
