use springmesh::{Particle, SpringConstraint, Vec2};

fn particles(a: Vec2<f32>, b: Vec2<f32>) -> Vec<Particle<f32>> {
    vec![Particle::new(a), Particle::new(b)]
}

#[test]
fn force_is_symmetric() {
    let cases = [
        (Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(14.0, 3.0)),
        (Vec2::new(5.0, 5.0), Vec2::new(5.0, 15.0), Vec2::new(4.0, 9.0)),
        (Vec2::new(-3.0, 2.0), Vec2::new(7.0, 12.0), Vec2::new(20.0, -1.0)),
    ];
    for (a, b, moved) in cases {
        let mut ps = particles(a, b);
        let spring = SpringConstraint::from_particles(0, 1, &ps, 50.0, 0.1);
        ps[1].position = moved;
        spring.apply(&mut ps);
        assert_eq!(ps[0].acceleration, -ps[1].acceleration);
        assert!(ps[0].acceleration.length() > 0.0);
    }
}

#[test]
fn compressed_spring_pushes_apart() {
    let mut ps = particles(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    let spring = SpringConstraint::from_particles(0, 1, &ps, 3.0, 0.1);
    ps[1].position.x = 6.0;
    spring.apply(&mut ps);
    // A sits left of B, so pushing apart means A accelerates toward -x.
    assert!(ps[0].acceleration.x < 0.0);
    assert!(ps[1].acceleration.x > 0.0);
}

#[test]
fn direction_is_normalised_by_rest_length() {
    // rest = 10, stretched to 20 along x: d = (-20, 0), dir = (-2, 0), f = -10 * k
    let mut ps = particles(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    let spring = SpringConstraint::from_particles(0, 1, &ps, 1.0, 0.1);
    ps[1].position.x = 20.0;
    let force = spring.force(&ps);
    assert!((force.x - 20.0).abs() < 1e-5, "force.x = {}", force.x);
    assert_eq!(force.y, 0.0);
}

#[test]
fn apply_accumulates() {
    let mut ps = particles(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    let spring = SpringConstraint::from_particles(0, 1, &ps, 1.0, 0.1);
    ps[1].position.x = 11.0;
    ps[0].acceleration = Vec2::new(0.0, 4.0);
    spring.apply(&mut ps);
    spring.apply(&mut ps);
    assert!((ps[0].acceleration.x - 2.2).abs() < 1e-5);
    assert_eq!(ps[0].acceleration.y, 4.0);
}

#[test]
fn rest_length_survives_motion() {
    let mut ps = particles(Vec2::new(0.0, 0.0), Vec2::new(6.0, 8.0));
    let spring = SpringConstraint::from_particles(0, 1, &ps, 1.0, 0.1);
    ps[0].position = Vec2::new(100.0, 100.0);
    spring.apply(&mut ps);
    assert!((spring.rest_length() - 10.0).abs() < 1e-6);
}
