//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - observed values: `o`
//! - expected goal trajectory: `-` line

use crate::projection::ChartRow;

/// Render the actual-vs-expected chart for one milestone.
pub fn render_chart(rows: &[ChartRow], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let (Some((x_min, x_max)), Some((y_min, y_max))) = (year_range(rows), value_range(rows))
    else {
        return "No chart data.\n".to_string();
    };
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    // Draw the trajectory first so observed points can overlay it.
    let expected: Vec<(f64, f64)> = rows
        .iter()
        .filter_map(|r| r.expected.map(|v| (f64::from(r.year), v)))
        .collect();
    draw_trajectory(&mut grid, &expected, x_min, x_max, y_min, y_max);

    for row in rows {
        if let Some(v) = row.actual {
            let x = map_x(f64::from(row.year), x_min, x_max, width);
            let y = map_y(v, y_min, y_max, height);
            grid[y][x] = 'o';
        }
    }

    // Build final string. We include a small header with ranges.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: year=[{x_min:.0}, {x_max:.0}] | value=[{y_min:.2}, {y_max:.2}]\n"
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn year_range(rows: &[ChartRow]) -> Option<(f64, f64)> {
    let first = f64::from(rows.first()?.year);
    let last = f64::from(rows.last()?.year);
    if last > first {
        Some((first, last))
    } else {
        // a single year still deserves a grid
        Some((first - 1.0, first + 1.0))
    }
}

fn value_range(rows: &[ChartRow]) -> Option<(f64, f64)> {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;

    for row in rows {
        for v in [row.actual, row.expected].into_iter().flatten() {
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }
    }

    if !(min_v.is_finite() && max_v.is_finite()) {
        return None;
    }
    if max_v > min_v {
        Some((min_v, max_v))
    } else {
        Some((min_v - 0.5, max_v + 0.5))
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_trajectory(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, v) in points {
        let x = map_x(t, x_min, x_max, width);
        let y = map_y(v, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
