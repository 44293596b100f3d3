use criterion::{black_box, criterion_group, criterion_main, Criterion};
use klock_graphics::{Color, Point, Rect};
use klock_render_common::{Canvas, Paint};
use klock_render_pixels::{FontAsset, PixelsCanvas};

const FONT_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../../assets/fonts/DejaVuSansMono.ttf"
);
const WIDTH: u32 = 400;
const HEIGHT: u32 = 400;
const CELLS: usize = 400;
const CELL: f32 = 4.0;

fn bench_grid(c: &mut Criterion) {
    let font = FontAsset::from_file(FONT_PATH).expect("bundled font");
    let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
    let paint = Paint::fill(Color::BLACK);
    c.bench_function("grid_full_redraw", |b| {
        b.iter(|| {
            let mut canvas = PixelsCanvas::new(&mut frame, WIDTH, HEIGHT, 1.0, &font);
            for row in 0..CELLS {
                for col in 0..CELLS {
                    let rect =
                        Rect::from_xywh(col as f32 * CELL, row as f32 * CELL, CELL, CELL);
                    canvas.draw_rect(rect, &paint);
                }
            }
        });
        black_box(&frame);
    });
}

fn bench_clock_lines(c: &mut Criterion) {
    let font = FontAsset::from_file(FONT_PATH).expect("bundled font");
    let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
    let stroke = Paint::stroke(Color::BLACK, 1.0);
    let center = Point::new(200.0, 200.0);
    c.bench_function("clock_ticks", |b| {
        b.iter(|| {
            let mut canvas = PixelsCanvas::new(&mut frame, WIDTH, HEIGHT, 1.0, &font);
            canvas.draw_oval(Rect::from_circle(center, 195.0), &Paint::fill(Color::WHITE));
            for i in 0..60 {
                let angle = i as f32 * std::f32::consts::TAU / 60.0;
                canvas.draw_line(
                    center.polar_offset(angle, 190.0),
                    center.polar_offset(angle, 195.0),
                    &stroke,
                );
            }
        });
        black_box(&frame);
    });
}

criterion_group!(raster, bench_grid, bench_clock_lines);
criterion_main!(raster);
