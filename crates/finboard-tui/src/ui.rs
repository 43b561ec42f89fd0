use finboard_core::dashboard::{
    overview_breakdown, stat_cards, total_of, transactions_of, StatKind, Transaction,
    TransactionKind, RECENT_TRANSACTIONS,
};
use finboard_core::predictions::{
    projected_savings_target, AlertKind, Trend, ALERTS, BUDGET_HEALTH, CATEGORY_PREDICTIONS,
    SAVINGS_PROJECTION, SPENDING_FORECAST,
};
use finboard_core::{format_usd, ChatRole, Page, QUICK_PROMPTS};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::{App, FocusPane, InputMode};
use crate::handler::quick_prompt_key;

const PRIMARY: Color = Color::Rgb(139, 92, 246);
const SUCCESS: Color = Color::Green;
const WARNING: Color = Color::Yellow;
const DESTRUCTIVE: Color = Color::Red;

/// Render `**bold**` runs of a reply line as bold spans. An unclosed `**`
/// is kept as literal text.
fn styled_reply_line(text: &str) -> Line<'static> {
    let parts: Vec<&str> = text.split("**").collect();
    // An odd number of parts means every marker was closed
    let balanced = parts.len() % 2 == 1;
    let last = parts.len() - 1;

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        let inside_marker = i % 2 == 1;
        if inside_marker && (balanced || i < last) {
            if !part.is_empty() {
                spans.push(Span::styled(
                    part.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            }
        } else if inside_marker {
            spans.push(Span::raw(format!("**{part}")));
        } else if !part.is_empty() {
            spans.push(Span::raw(part.to_string()));
        }
    }

    Line::from(spans)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, body, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let [sidebar_area, content_area] =
        Layout::horizontal([Constraint::Length(26), Constraint::Min(0)]).areas(body_area);

    render_header(app, frame, header_area);
    render_sidebar(app, frame, sidebar_area);

    app.content_area = Some(content_area);
    match app.page {
        Page::Dashboard => render_dashboard(app, frame, content_area),
        Page::Income => render_transactions_page(frame, content_area, TransactionKind::Income),
        Page::Expense => render_transactions_page(frame, content_area, TransactionKind::Expense),
        Page::Predictions => render_predictions(frame, content_area),
        Page::Assistant => render_assistant(app, frame, content_area),
    }

    render_footer(app, frame, footer_area);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Finance Manager ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(app.page.route(), Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_sidebar(app: &mut App, frame: &mut Frame, area: Rect) {
    let pages = Page::all();
    let [profile_area, nav_area, _, logout_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(pages.len() as u16 + 2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    // Store nav list area for mouse hit-testing
    app.sidebar_area = Some(nav_area);

    let profile = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} ", app.user_initials),
            Style::default().bg(Color::DarkGray).fg(Color::White).bold(),
        )),
        Line::default(),
        Line::from(Span::styled(app.user_name.clone(), Style::default().bold())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Finance Manager "),
    );
    frame.render_widget(profile, profile_area);

    let nav_focused = app.focus == FocusPane::Sidebar;
    let border_color = if nav_focused { Color::Cyan } else { Color::DarkGray };

    let items: Vec<ListItem> = pages
        .iter()
        .map(|page| {
            let style = if app.is_active(*page) {
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(format!(" {} {} ", page.icon(), page.label())).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(" Navigate "),
        )
        .highlight_style(
            Style::default()
                .bg(PRIMARY)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, nav_area, &mut app.sidebar_state);

    let logout = Paragraph::new(Line::from(vec![
        Span::styled(" q ", Style::default().bg(Color::DarkGray).fg(Color::White)),
        Span::styled(" Logout", Style::default().fg(Color::Gray)),
    ]));
    frame.render_widget(logout, logout_area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };

    let mode_text = match app.input_mode {
        InputMode::Normal => format!(" {} ", app.page.as_str().to_uppercase()),
        InputMode::Editing => " TYPING ".to_string(),
    };

    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let mut hints = match (app.page, app.input_mode, app.focus) {
        (Page::Assistant, InputMode::Editing, _) => vec![
            Span::styled(" Enter ", key_style),
            Span::styled(" send ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" stop typing ", label_style),
        ],
        (Page::Assistant, InputMode::Normal, FocusPane::Prompts) => vec![
            Span::styled(" h/l ", key_style),
            Span::styled(" choose ", label_style),
            Span::styled(" Enter ", key_style),
            Span::styled(" send ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" back ", label_style),
        ],
        (Page::Assistant, InputMode::Normal, FocusPane::Content) => {
            let first = quick_prompt_key(0).unwrap_or_default();
            let last = quick_prompt_key(QUICK_PROMPTS.len() - 1).unwrap_or_default();
            vec![
                Span::styled(" i ", key_style),
                Span::styled(" type ", label_style),
                Span::styled(format!(" {first}-{last} "), key_style),
                Span::styled(" quick prompt ", label_style),
                Span::styled(" p ", key_style),
                Span::styled(" prompts ", label_style),
                Span::styled(" j/k ", key_style),
                Span::styled(" scroll ", label_style),
            ]
        }
        (_, _, FocusPane::Sidebar) => vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" nav ", label_style),
            Span::styled(" Enter ", key_style),
            Span::styled(" open ", label_style),
        ],
        _ => vec![],
    };

    if app.input_mode == InputMode::Normal {
        hints.extend(vec![
            Span::styled(" 1-5 ", key_style),
            Span::styled(" pages ", label_style),
            Span::styled(" Tab ", key_style),
            Span::styled(" focus ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ]);
    }

    let footer_content = Line::from(
        vec![
            Span::styled(mode_text, mode_style),
            Span::styled(" ", label_style),
        ]
        .into_iter()
        .chain(hints)
        .collect::<Vec<_>>(),
    );

    let footer = Paragraph::new(footer_content).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}

fn card_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {title} "))
}

fn transaction_item(t: &Transaction) -> ListItem<'static> {
    let amount_color = match t.kind {
        TransactionKind::Income => SUCCESS,
        TransactionKind::Expense => DESTRUCTIVE,
    };
    let arrow = match t.kind {
        TransactionKind::Income => "↗",
        TransactionKind::Expense => "↘",
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::raw(format!(" {} ", t.icon)),
            Span::styled(t.name, Style::default().bold()),
            Span::raw("  "),
            Span::styled(
                format!("{} {} {}", t.kind.sign(), format_usd(t.amount), arrow),
                Style::default().fg(amount_color).bold(),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", t.date),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn render_dashboard(app: &App, frame: &mut Frame, area: Rect) {
    let [cards_area, lower_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    let card_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);
    for (card, card_area) in stat_cards(&app.snapshot).iter().zip(card_areas.iter()) {
        let color = match card.kind {
            StatKind::Balance => PRIMARY,
            StatKind::Income => WARNING,
            StatKind::Expenses => DESTRUCTIVE,
        };
        let widget = Paragraph::new(Line::from(Span::styled(
            format_usd(card.amount),
            Style::default().fg(color).bold(),
        )))
        .block(card_block(card.title, color));
        frame.render_widget(widget, *card_area);
    }

    let [transactions_area, overview_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(lower_area);

    let items: Vec<ListItem> = RECENT_TRANSACTIONS.iter().map(transaction_item).collect();
    let list = List::new(items).block(card_block("Recent Transactions", Color::DarkGray));
    frame.render_widget(list, transactions_area);

    let overview_block = card_block("Financial Overview", Color::DarkGray);
    let inner = overview_block.inner(overview_area);
    frame.render_widget(overview_block, overview_area);

    let [chart_area, total_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

    let colors = [PRIMARY, DESTRUCTIVE, WARNING];
    let bars: Vec<Bar> = overview_breakdown(&app.snapshot)
        .iter()
        .zip(colors)
        .map(|((label, value), color)| {
            Bar::default()
                .value(*value)
                .label(Line::from(*label))
                .text_value(format_usd(*value))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(14)
        .bar_gap(2)
        .value_style(Style::default().fg(Color::White).bold());
    frame.render_widget(chart, chart_area);

    let total = Paragraph::new(vec![
        Line::from(Span::styled("Total Balance", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format_usd(app.snapshot.balance),
            Style::default().bold(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(total, total_area);
}

fn render_transactions_page(frame: &mut Frame, area: Rect, kind: TransactionKind) {
    let (title, color) = match kind {
        TransactionKind::Income => ("Total Income", SUCCESS),
        TransactionKind::Expense => ("Total Expenses", DESTRUCTIVE),
    };
    let transactions = transactions_of(kind);

    let [total_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let total = Paragraph::new(Line::from(vec![
        Span::styled(format_usd(total_of(&transactions)), Style::default().fg(color).bold()),
        Span::styled(
            format!("  across {} transactions", transactions.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(card_block(title, color));
    frame.render_widget(total, total_area);

    let list_title = match kind {
        TransactionKind::Income => "Income Sources",
        TransactionKind::Expense => "All Expenses",
    };
    let items: Vec<ListItem> = transactions.iter().map(transaction_item).collect();
    let list = List::new(items).block(card_block(list_title, Color::DarkGray));
    frame.render_widget(list, list_area);
}

fn render_predictions(frame: &mut Frame, area: Rect) {
    let [alerts_area, charts_area, lower_area] = Layout::vertical([
        Constraint::Length(ALERTS.len() as u16 + 2),
        Constraint::Percentage(45),
        Constraint::Min(0),
    ])
    .areas(area);

    let alert_lines: Vec<Line> = ALERTS
        .iter()
        .map(|alert| {
            let (icon, color) = match alert.kind {
                AlertKind::Warning => ("⚠", WARNING),
                AlertKind::Success => ("◎", SUCCESS),
                AlertKind::Info => ("↘", PRIMARY),
            };
            Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(color).bold()),
                Span::raw(alert.message),
            ])
        })
        .collect();
    let alerts = Paragraph::new(alert_lines)
        .block(card_block("Smart Predictions · Updated 2 hours ago", PRIMARY));
    frame.render_widget(alerts, alerts_area);

    let [forecast_area, savings_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(charts_area);

    let forecast_bars: Vec<Bar> = SPENDING_FORECAST
        .iter()
        .map(|point| {
            let style = if point.is_predicted() {
                Style::default().fg(PRIMARY).add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(PRIMARY)
            };
            Bar::default()
                .value(point.value())
                .label(Line::from(point.month))
                .text_value(format!("{}", point.value()))
                .style(style)
        })
        .collect();
    let forecast = BarChart::default()
        .block(card_block("Spending Forecast (dim = predicted)", Color::DarkGray))
        .data(BarGroup::default().bars(&forecast_bars))
        .bar_width(6)
        .bar_gap(1);
    frame.render_widget(forecast, forecast_area);

    let savings_block = card_block("Savings Projection", SUCCESS);
    let savings_inner = savings_block.inner(savings_area);
    frame.render_widget(savings_block, savings_area);

    let [savings_chart_area, savings_note_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(savings_inner);

    let savings_bars: Vec<Bar> = SAVINGS_PROJECTION
        .iter()
        .map(|(month, savings)| {
            Bar::default()
                .value(*savings)
                .label(Line::from(*month))
                .text_value(format!("{savings}"))
                .style(Style::default().fg(SUCCESS))
        })
        .collect();
    let savings = BarChart::default()
        .data(BarGroup::default().bars(&savings_bars))
        .bar_width(5)
        .bar_gap(1);
    frame.render_widget(savings, savings_chart_area);

    let (target_month, target) = projected_savings_target();
    let note = Paragraph::new(Span::styled(
        format!(
            "You're projected to reach {} in savings by {}!",
            format_usd(target),
            month_name(target_month)
        ),
        Style::default().fg(SUCCESS).bold(),
    ));
    frame.render_widget(note, savings_note_area);

    let [categories_area, health_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(lower_area);

    render_category_predictions(frame, categories_area);
    render_budget_health(frame, health_area);
}

fn month_name(short: &str) -> &str {
    match short {
        "Apr" => "April",
        other => other,
    }
}

fn render_category_predictions(frame: &mut Frame, area: Rect) {
    let block = card_block("Category Predictions", Color::DarkGray);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(2); CATEGORY_PREDICTIONS.len()]).split(inner);
    for (cat, row) in CATEGORY_PREDICTIONS.iter().zip(rows.iter()) {
        let [text_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);

        // Rising spend is bad news
        let trend_color = match cat.trend {
            Trend::Up => DESTRUCTIVE,
            Trend::Down => SUCCESS,
        };
        let text = Line::from(vec![
            Span::styled(cat.category, Style::default().bold()),
            Span::raw("  "),
            Span::styled(format!("${}", cat.current), Style::default().fg(Color::Gray)),
            Span::styled(" → ", Style::default().fg(Color::Gray)),
            Span::styled(format!("${}", cat.predicted), Style::default().bold()),
            Span::styled(
                format!(" {}{}%", cat.trend.arrow(), cat.percentage.abs()),
                Style::default().fg(trend_color),
            ),
        ]);
        frame.render_widget(Paragraph::new(text), text_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(PRIMARY).bg(Color::Black))
            .ratio(cat.progress())
            .label("");
        frame.render_widget(gauge, gauge_area);
    }
}

fn render_budget_health(frame: &mut Frame, area: Rect) {
    let block = card_block("Budget Health Score", Color::DarkGray);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [score_area, metrics_area] =
        Layout::horizontal([Constraint::Length(14), Constraint::Min(0)]).areas(inner);

    let score = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            BUDGET_HEALTH.score.to_string(),
            Style::default().fg(PRIMARY).bold(),
        )),
        Line::from(Span::styled(BUDGET_HEALTH.label, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(score, score_area);

    let metric_colors = [SUCCESS, PRIMARY, WARNING];
    let rows = Layout::vertical(vec![Constraint::Length(2); BUDGET_HEALTH.metrics.len()])
        .split(metrics_area);
    for ((metric, row), color) in BUDGET_HEALTH.metrics.iter().zip(rows.iter()).zip(metric_colors) {
        let [label_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);

        let label = Line::from(vec![
            Span::styled(metric.label, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(format!("{}%", metric.percent), Style::default().fg(color).bold()),
        ]);
        frame.render_widget(Paragraph::new(label), label_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .percent(metric.percent.min(100))
            .label("");
        frame.render_widget(gauge, gauge_area);
    }
}

fn render_assistant(app: &mut App, frame: &mut Frame, area: Rect) {
    let [chat_area, prompts_area, input_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area);

    // Store chat area dimensions for scroll calculations (inner size minus borders)
    app.chat_height = chat_area.height.saturating_sub(2);
    app.chat_width = chat_area.width.saturating_sub(2);

    let chat_focused = app.focus == FocusPane::Content && app.input_mode == InputMode::Normal;
    let chat_border_color = if chat_focused { Color::Cyan } else { Color::DarkGray };

    let chat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chat_border_color))
        .title(" Finance Bot · Powered by AI • Always here to help ")
        .title(
            Line::from(Span::styled(" ● Online ", Style::default().fg(SUCCESS)))
                .alignment(Alignment::Right),
        );

    let bot_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();

    for msg in app.session.messages() {
        let (name, style) = match msg.role {
            ChatRole::User => (
                "You",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            ChatRole::Assistant => ("Finance Bot", bot_style),
        };
        lines.push(Line::from(vec![
            Span::styled(name, style),
            Span::styled(
                format!("  {}", msg.created_at.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        match msg.role {
            ChatRole::User => {
                for line in msg.content.lines() {
                    lines.push(Line::from(line.to_string()));
                }
            }
            ChatRole::Assistant => {
                for line in msg.content.lines() {
                    lines.push(styled_reply_line(line));
                }
            }
        }
        lines.push(Line::default());
    }

    if app.is_typing() {
        lines.push(Line::from(Span::styled("Finance Bot", bot_style)));
        // Animated ellipsis: cycles through ".", "..", "..."
        let dots = ".".repeat((app.animation_frame as usize) + 1);
        lines.push(Line::from(Span::styled(
            format!("Thinking{}", dots),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    let chat = Paragraph::new(Text::from(lines))
        .block(chat_block)
        .wrap(Wrap { trim: false })
        .scroll((app.chat_scroll, 0));
    frame.render_widget(chat, chat_area);

    render_prompt_bar(app, frame, prompts_area);
    render_chat_input(app, frame, input_area);
}

fn render_prompt_bar(app: &App, frame: &mut Frame, area: Rect) {
    let prompts_focused = app.focus == FocusPane::Prompts;
    let border_color = if prompts_focused { Color::Cyan } else { Color::DarkGray };
    let selected = app.prompt_state.selected().unwrap_or(0);

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let mut spans: Vec<Span> = Vec::new();
    for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
        let style = if prompts_focused && i == selected {
            Style::default().bg(PRIMARY).fg(Color::White).bold()
        } else if app.is_typing() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        if let Some(key) = quick_prompt_key(i) {
            spans.push(Span::styled(format!(" {key} "), key_style));
        }
        spans.push(Span::styled(format!(" {} {} ", prompt.icon, prompt.text), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Quick prompts (p to choose) "),
    );
    frame.render_widget(bar, area);
}

fn render_chat_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border_color = if app.is_typing() {
        Color::DarkGray
    } else if editing {
        Color::Yellow
    } else {
        Color::Gray
    };
    let title = if app.is_typing() {
        " Waiting for reply... "
    } else {
        " Ask (i to type, Enter to send) "
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    // Calculate visible portion of input with horizontal scrolling
    // Inner width = total width - 2 (for borders)
    let inner_width = area.width.saturating_sub(2) as usize;
    let (visible_text, cursor_x) = input_window(&app.chat_input, app.chat_cursor, inner_width);

    let input = if app.chat_input.is_empty() && !editing {
        Paragraph::new(Span::styled(
            "Ask about your finances...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(visible_text).style(Style::default().fg(Color::Cyan))
    };

    frame.render_widget(input.block(input_block), area);

    // Show cursor when editing
    if editing {
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

/// Horizontal window over `input` that keeps the cursor (a char index) on
/// screen. Measured in terminal columns, so wide glyphs take two. Returns the
/// visible text and the cursor column within it.
fn input_window(input: &str, cursor: usize, width: usize) -> (String, u16) {
    let widths: Vec<usize> = input.chars().map(|c| c.width().unwrap_or(0)).collect();
    let cursor = cursor.min(widths.len());

    // Leave one column for the cursor itself
    let mut start = 0;
    let mut before_cursor: usize = widths[..cursor].iter().sum();
    while start < cursor && before_cursor + 1 > width {
        before_cursor -= widths[start];
        start += 1;
    }

    let mut used = 0;
    let visible: String = input
        .chars()
        .zip(&widths)
        .skip(start)
        .take_while(|(_, w)| {
            used += **w;
            used <= width
        })
        .map(|(c, _)| c)
        .collect();

    (visible, before_cursor as u16)
}
