use nf_moc::Point;

/// Wall points only, in generation order.
pub fn wall_contour(points: &[Point]) -> Vec<Point> {
    points.iter().filter(|p| p.is_wall()).copied().collect()
}
