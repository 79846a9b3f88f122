use crate::app::{ActivePanel, App};
use chainwatch_types::{AlertSeverity, AlertStatus, TransactionStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, app, main_layout[0]);

    if app.snapshot.sidebar_open {
        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
            .split(main_layout[1]);
        render_metrics_sidebar(f, app, content_layout[0]);
        render_main(f, app, content_layout[1]);
    } else {
        render_main(f, app, main_layout[1]);
    }

    render_footer(f, main_layout[2]);
}

fn render_main(f: &mut Frame, app: &mut App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_transactions(f, app, layout[0]);
    render_alerts(f, app, layout[1]);
}

fn render_header(f: &mut Frame, app: &mut App, area: Rect) {
    let connection = if app.snapshot.connected {
        Span::styled("● LIVE", Style::default().fg(Color::Green))
    } else {
        Span::styled("○ OFFLINE", Style::default().fg(Color::DarkGray))
    };

    let last_update = app
        .snapshot
        .last_update
        .map(|ts| ts.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let line = Line::from(vec![
        connection,
        Span::raw("  |  last update "),
        Span::styled(last_update, Style::default().fg(Color::White)),
        Span::raw(format!(
            "  |  {} alerts, {} entities tracked",
            app.snapshot.alerts.len(),
            app.snapshot.entities.len()
        )),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .title(" Chainwatch - Compliance Monitor ")
                .borders(Borders::ALL),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn render_metrics_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let metrics = &app.snapshot.metrics;
    let graph = &app.snapshot.network_graph;

    let mut lines = vec![
        metric_line("Transactions", format_count(metrics.total_transactions)),
        metric_line("Volume USD", format!("{:.1}M", metrics.total_volume / 1_000_000.0)),
        metric_line("High risk", metrics.high_risk_transactions.to_string()),
        metric_line("Alerts today", metrics.alerts_today.to_string()),
        metric_line("Avg risk", format!("{:.2}", metrics.average_risk)),
        metric_line("Network size", format_count(metrics.network_size)),
        metric_line("Compliance", format!("{:.1}%", metrics.compliance_score * 100.0)),
        metric_line("Throughput", format!("{} tps", metrics.processing_speed)),
        Line::from(""),
        metric_line("Graph nodes", graph.nodes.len().to_string()),
        metric_line("Graph links", graph.links.len().to_string()),
    ];

    if let Some(score) = app.snapshot.risk_scores.first() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Latest risk score",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(risk_line("overall", score.overall));
        lines.push(risk_line("aml", score.aml));
        lines.push(risk_line("sanctions", score.sanctions));
        lines.push(risk_line("geographic", score.geographic));
        lines.push(risk_line("behavioral", score.behavioral));
        lines.push(risk_line("network", score.network));
        lines.push(risk_line("velocity", score.velocity));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Overview ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_transactions(f: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.active_panel == ActivePanel::Transactions {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let header = Row::new(vec!["Hash", "Amount", "Cur", "Risk", "Status", "Kind"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .snapshot
        .transactions
        .iter()
        .map(|tx| {
            let status_color = match tx.status {
                TransactionStatus::Flagged => Color::Red,
                TransactionStatus::Pending => Color::Yellow,
                TransactionStatus::Confirmed => Color::Green,
            };
            Row::new(vec![
                Cell::from(format!("{}…", tx.hash.get(..12).unwrap_or(&tx.hash))),
                Cell::from(format!("{:>12.2}", tx.amount)),
                Cell::from(tx.currency.to_string()),
                Cell::from(format!("{:.2}", tx.risk)),
                Cell::from(Span::styled(
                    tx.status.to_string(),
                    Style::default().fg(status_color),
                )),
                Cell::from(tx.kind.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(15),
        Constraint::Length(14),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Transactions (newest first) ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(table, area, &mut app.transaction_state);
}

fn render_alerts(f: &mut Frame, app: &mut App, area: Rect) {
    let border_style = if app.active_panel == ActivePanel::Alerts {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = app
        .snapshot
        .alerts
        .iter()
        .map(|alert| {
            let severity_color = match alert.severity {
                AlertSeverity::Critical => Color::Red,
                AlertSeverity::High => Color::LightRed,
                AlertSeverity::Medium => Color::Yellow,
                AlertSeverity::Low => Color::Green,
            };
            // Settled alerts are dimmed so open work stands out.
            let settled = matches!(
                alert.status,
                AlertStatus::Resolved | AlertStatus::FalsePositive
            );
            let dim = if settled {
                Modifier::DIM
            } else {
                Modifier::empty()
            };
            let line = Line::from(vec![
                Span::styled(
                    format!("[{:>8}] ", alert.severity),
                    Style::default().fg(severity_color).add_modifier(dim),
                ),
                Span::styled(alert.title.clone(), Style::default().add_modifier(dim)),
                Span::styled(
                    format!("  ({})", alert.status),
                    Style::default().fg(Color::DarkGray).add_modifier(dim),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Alerts ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    f.render_stateful_widget(list, area, &mut app.alert_state);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(
        " q: quit | tab: switch panel | ↑/↓: select | r: resolve alert | s: toggle sidebar",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}

fn format_count(value: u64) -> String {
    if value >= 10_000 {
        format!("{:.1}k", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

fn metric_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<14}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn risk_line(label: &str, value: f64) -> Line<'static> {
    let color = if value > 0.7 {
        Color::Red
    } else if value > 0.4 {
        Color::Yellow
    } else {
        Color::Green
    };
    Line::from(vec![
        Span::styled(
            format!("  {label:<12}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("{value:.2}"), Style::default().fg(color)),
    ])
}
