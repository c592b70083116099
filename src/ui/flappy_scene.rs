//! Flappy game UI rendering.
//!
//! The simulation runs in a fixed 400x400 continuous field; this scene scales
//! those coordinates onto whatever terminal area is available.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar,
};
use crate::games::flappy::{FlappyGame, AREA_HEIGHT, AREA_WIDTH, PIPE_GAP, PIPE_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the Flappy game scene.
pub fn render_flappy_scene(frame: &mut Frame, area: Rect, game: &FlappyGame, high_score: u32) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, 10, 22);

    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, high_score);
}

/// Render the main play area with bird and pipes.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    // Scale game coordinates to display area
    let x_scale = width as f64 / AREA_WIDTH;
    let y_scale = height as f64 / AREA_HEIGHT;

    let bird_display_row = (game.bird.y * y_scale).round() as usize;
    let bird_display_col = (game.bird.x * x_scale).round() as usize;

    let bird_char = if game.bird.velocity < -0.5 {
        "▲" // Flapping up
    } else if game.bird.velocity > 1.0 {
        "▼" // Falling fast
    } else {
        "►" // Neutral
    };

    // Build the play area line by line
    let mut lines = Vec::with_capacity(height);

    for display_row in 0..height {
        let game_row = display_row as f64 / y_scale;
        let mut spans = Vec::new();

        for display_col in 0..width {
            if display_row == bird_display_row && display_col == bird_display_col {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let game_col = display_col as f64 / x_scale;

            let mut is_pipe = false;
            let mut is_gap_edge = false;
            for pipe in &game.pipes {
                if game_col >= pipe.x && game_col < pipe.x + PIPE_WIDTH {
                    let gap_top = pipe.top_height;
                    let gap_bottom = gap_top + PIPE_GAP;

                    if game_row < gap_top || game_row >= gap_bottom {
                        is_pipe = true;
                    } else if game_row - gap_top < 1.0 / y_scale
                        || gap_bottom - game_row <= 1.0 / y_scale
                    {
                        is_gap_edge = true;
                    }
                    break;
                }
            }

            if is_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else if is_gap_edge {
                spans.push(Span::styled("░", Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::styled(" ", Style::default()));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    render_status_bar(
        frame,
        area,
        &format!("Score: {}", game.score),
        Color::Green,
        &[
            ("[Space/Click]", "Flap"),
            ("[R]", "Restart"),
            ("[Esc]", "Menu"),
        ],
    );
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame, high_score: u32) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(high_score.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Height: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0}", AREA_HEIGHT - game.bird.y),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.pipes.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
