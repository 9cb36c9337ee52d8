use crate::grid::Cell;
use crate::instance::Instance;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Line as SvgLine, Path, Rectangle, Text};

const CELL: f64 = 32.0;
const MARGIN: f64 = 10.0;

const PALETTE: &[&str] = &[
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#bfef45",
    "#469990", "#9a6324", "#800000", "#808000", "#000075",
];

fn center(cell: Cell) -> (f64, f64) {
    (
        MARGIN + (cell.col as f64 + 0.5) * CELL,
        MARGIN + (cell.row as f64 + 0.5) * CELL,
    )
}

fn endpoint(cell: Cell, color: &str, label: String) -> (Circle, Text) {
    let (x, y) = center(cell);
    let circle = Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", CELL * 0.3)
        .set("fill", color)
        .set("stroke", "black")
        .set("stroke-width", 1);
    let text = Text::new(label)
        .set("x", x)
        .set("y", y + 4.0)
        .set("text-anchor", "middle")
        .set("font-size", "11px")
        .set("fill", "white");
    (circle, text)
}

/// Draws the grid, every line (routed paths solid, endpoint-only pairs
/// dashed) and the popular cells.
pub fn render(instance: &Instance) -> String {
    let width = instance.width as f64 * CELL + 2.0 * MARGIN;
    let height = instance.height as f64 * CELL + 2.0 * MARGIN;

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height));

    for row in 0..instance.height {
        for col in 0..instance.width {
            let cell = Rectangle::new()
                .set("x", MARGIN + col as f64 * CELL)
                .set("y", MARGIN + row as f64 * CELL)
                .set("width", CELL)
                .set("height", CELL)
                .set("fill", "white")
                .set("stroke", "#cccccc")
                .set("stroke-width", 1);
            document = document.add(cell);
        }
    }

    for &cell in &instance.popular {
        let popular = Rectangle::new()
            .set("x", MARGIN + cell.col as f64 * CELL + 2.0)
            .set("y", MARGIN + cell.row as f64 * CELL + 2.0)
            .set("width", CELL - 4.0)
            .set("height", CELL - 4.0)
            .set("fill", "#ffe680")
            .set("title", format!("popular ({}, {})", cell.col, cell.row));
        document = document.add(popular);
    }

    for (i, line) in instance.lines.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        match &line.path {
            Some(path) => {
                let (x0, y0) = center(path[0]);
                let mut data = Data::new().move_to((x0, y0));
                for &cell in &path[1..] {
                    data = data.line_to(center(cell));
                }
                let polyline = Path::new()
                    .set("fill", "none")
                    .set("stroke", color)
                    .set("stroke-width", 6)
                    .set("stroke-linejoin", "round")
                    .set("d", data)
                    .set("title", format!("line {i}"));
                document = document.add(polyline);
            }
            None => {
                let (x1, y1) = center(line.start);
                let (x2, y2) = center(line.end);
                let dashed = SvgLine::new()
                    .set("x1", x1)
                    .set("y1", y1)
                    .set("x2", x2)
                    .set("y2", y2)
                    .set("stroke", color)
                    .set("stroke-width", 2)
                    .set("stroke-dasharray", "4 4");
                document = document.add(dashed);
            }
        }
        for cell in [line.start, line.end] {
            let (circle, text) = endpoint(cell, color, i.to_string());
            document = document.add(circle).add(text);
        }
    }

    document.to_string()
}
