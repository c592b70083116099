use arcade::build_info;
use arcade::core::GameSession;
use arcade::games::GameKind;
use arcade::input::{handle_game_key, handle_game_mouse, InputResult};
use arcade::scores::HighScores;
use arcade::ui;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

enum Screen {
    Menu,
    Playing,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "arcade {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arcade - Terminal Game Collection\n");
                println!("Usage: arcade [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut scores = HighScores::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut scores);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    scores: &mut HighScores,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut screen = Screen::Menu;
    let mut menu_selected: usize = 0;
    let mut session: Option<GameSession> = None;

    loop {
        match screen {
            Screen::Menu => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::render_menu(frame, area, menu_selected, scores);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key.code {
                            KeyCode::Up => menu_selected = menu_selected.saturating_sub(1),
                            KeyCode::Down => {
                                menu_selected = (menu_selected + 1).min(GameKind::ALL.len() - 1)
                            }
                            KeyCode::Enter => {
                                session = Some(GameSession::start(
                                    GameKind::ALL[menu_selected],
                                    &mut rng,
                                    Instant::now(),
                                ));
                                screen = Screen::Playing;
                            }
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                }
            }
            Screen::Playing => {
                let sess = match session.as_mut() {
                    Some(sess) => sess,
                    None => {
                        screen = Screen::Menu;
                        continue;
                    }
                };

                terminal.draw(|frame| ui::draw_game(frame, sess, scores))?;

                if event::poll(Duration::from_millis(10))? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match handle_game_key(key, sess) {
                                InputResult::Quit => return Ok(()),
                                InputResult::BackToMenu => {
                                    session = None;
                                    screen = Screen::Menu;
                                    continue;
                                }
                                InputResult::Restart => {
                                    sess.restart(&mut rng, Instant::now());
                                }
                                InputResult::Continue => {}
                            }
                        }
                        Event::Mouse(mouse) => handle_game_mouse(mouse, sess),
                        _ => {}
                    }
                }

                // Run due simulation steps; persist the table when a run
                // has just terminated.
                let was_over = sess.outcome.is_some();
                sess.advance(Instant::now(), &mut rng, scores);
                if !was_over && sess.outcome.is_some() {
                    scores.save()?;
                }
            }
        }
    }
}
