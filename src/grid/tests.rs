use {
  super::*,
  euclid::point2,
  rand::SeedableRng,
  rand_pcg::Pcg64,
};

fn deg(d: f64) -> Angle<f64> { Angle::degrees(d) }

#[test] fn claim_unclaimed_then_continue() {
  let mut grid = Grid::new(Resolution::new(10, 10));
  assert_eq!(grid.query(point2(3, 4)), Occupancy::Open);
  assert_eq!(grid.claim(point2(3, 4), deg(45.0)), Claim::Continued);
  assert_eq!(grid.claim(point2(3, 4), deg(48.0)), Claim::Continued);
  match grid.query(point2(3, 4)) {
    Occupancy::Claimed(a) => assert!((a.to_degrees() - 48.0).abs() < 1e-9),
    other => panic!("{:?}", other)
  }
}

#[test] fn divergent_claim_is_collision() {
  let mut grid = Grid::new(Resolution::new(10, 10));
  grid.claim(point2(1, 1), deg(0.0));
  assert_eq!(grid.claim(point2(1, 1), deg(90.0)), Claim::Collision(deg(0.0)));
  assert_eq!(grid.query(point2(1, 1)), Occupancy::Claimed(deg(0.0)));
  assert!(matches!(grid.claim(point2(1, 1), deg(6.0)), Claim::Collision(_)));
  assert_eq!(grid.claim(point2(1, 1), deg(-4.0)), Claim::Continued);
}

#[test] fn continuation_wraps_around() {
  let mut grid = Grid::new(Resolution::new(4, 4));
  grid.claim(point2(0, 0), deg(-90.0));
  assert_eq!(grid.claim(point2(0, 0), deg(268.0)), Claim::Continued);
  assert_eq!(grid.claim(point2(0, 0), deg(-1.0)), Claim::Collision(deg(268.0)));
}

#[test] fn out_of_bounds_is_blocked() {
  let mut grid = Grid::new(Resolution::new(4, 3));
  for cell in [point2(-1, 0), point2(0, -1), point2(4, 0), point2(0, 3)] {
    assert_eq!(grid.query(cell), Occupancy::OutOfBounds);
    assert_eq!(grid.claim(cell, deg(0.0)), Claim::OutOfBounds);
    assert!(!grid.seed(cell, deg(0.0)));
  }
  assert_eq!(grid.claimed_count(), 0);
}

#[test] fn seed_random_claims_integral_angles() {
  let mut grid = Grid::new(Resolution::new(32, 32));
  let mut rng = Pcg64::seed_from_u64(7);
  grid.seed_random(40, &mut rng);
  let claimed: Vec<_> = grid.cells()
    .filter_map(|(xy, cell)| match cell {
      Cell::Claimed(a) => Some((xy, a)),
      Cell::Unclaimed => None
    })
    .collect();
  assert!(!claimed.is_empty() && claimed.len() <= 40);
  claimed.iter().for_each(|(xy, a)| {
    let d = a.to_degrees();
    assert!((0.0..360.0).contains(&d));
    assert_eq!(d, d.round());
    assert!(*xy != point2(31, 31));
  });
}

#[test] fn seed_random_on_single_cell() {
  let mut grid = Grid::new(Resolution::new(1, 1));
  grid.seed_random(3, &mut Pcg64::seed_from_u64(0));
  assert_eq!(grid.claimed_count(), 1);
}

#[test] fn cells_are_row_major() {
  let grid = Grid::new(Resolution::new(3, 2));
  let xy: Vec<_> = grid.cells().map(|(xy, _)| (xy.x, xy.y)).collect();
  assert_eq!(xy, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test] fn debug_image() {
  let mut grid = Grid::new(Resolution::new(4, 4));
  grid.seed(point2(2, 1), deg(120.0));
  let image = grid.display_debug();
  assert_eq!(image.dimensions(), (4, 4));
  assert_eq!(*image.get_pixel(2, 1), Rgb([0, 255, 0]));
  assert_eq!(*image.get_pixel(0, 0), Rgb([0, 0, 0]));
}
