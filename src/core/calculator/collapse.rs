use crate::models::{Marker, TimelineItem};

fn flush(run: &mut Vec<Marker>, out: &mut Vec<TimelineItem>) {
    match run.len() {
        0 => {}
        1 => out.extend(run.drain(..).map(TimelineItem::Marker)),
        _ => out.push(TimelineItem::MergedMarkerGroup {
            markers: std::mem::take(run),
        }),
    }
}

/// Replace every run of two or more consecutive markers with one group.
/// Single markers and all non-marker items pass through in order.
pub fn collapse_markers(items: Vec<TimelineItem>) -> Vec<TimelineItem> {
    let mut out = Vec::with_capacity(items.len());
    let mut run: Vec<Marker> = Vec::new();

    for item in items {
        match item {
            TimelineItem::Marker(m) => run.push(m),
            other => {
                flush(&mut run, &mut out);
                out.push(other);
            }
        }
    }
    flush(&mut run, &mut out);

    out
}
