#[cfg(test)]
mod tests {
    use royale_core::types::Vector2;

    use crate::melee::{adjacent_tower, in_king_contact};
    use crate::steering::{king_chasing, tower_busting, CreepContext, Steering};
    use crate::targeting::nearest;
    use crate::Circle;

    const EPS: f64 = 1e-9;

    fn creep_at(x: f64, y: f64) -> CreepContext {
        CreepContext {
            body: Circle::new(Vector2::new(x, y), 10.0),
            speed: 50.0,
            attack_range: 0.0,
        }
    }

    // ---- Targeting ----

    #[test]
    fn test_nearest_empty_is_none() {
        let none: Vec<(u32, Vector2)> = Vec::new();
        assert!(nearest(Vector2::ZERO, none).is_none());
    }

    #[test]
    fn test_nearest_picks_closest() {
        let candidates = vec![
            (0, Vector2::new(100.0, 0.0)),
            (1, Vector2::new(0.0, 30.0)),
            (2, Vector2::new(-50.0, 0.0)),
        ];
        let (key, distance) = nearest(Vector2::ZERO, candidates).unwrap();
        assert_eq!(key, 1);
        assert!((distance - 30.0).abs() < EPS);
    }

    #[test]
    fn test_nearest_tie_goes_to_first_seen() {
        let candidates = vec![
            ("east", Vector2::new(40.0, 0.0)),
            ("west", Vector2::new(-40.0, 0.0)),
        ];
        let (key, _) = nearest(Vector2::ZERO, candidates).unwrap();
        assert_eq!(key, "east");
    }

    // ---- Tower busting ----

    #[test]
    fn test_tower_buster_holds_without_targets() {
        assert_eq!(tower_busting(&creep_at(0.0, 0.0), &[]), Steering::Hold);
    }

    #[test]
    fn test_tower_buster_walks_to_nearest_tower() {
        let towers = [
            Circle::new(Vector2::new(500.0, 0.0), 60.0),
            Circle::new(Vector2::new(0.0, 200.0), 60.0),
        ];
        match tower_busting(&creep_at(0.0, 0.0), &towers) {
            Steering::MoveTo(next) => {
                assert!(next.x.abs() < EPS);
                assert!((next.y - 50.0).abs() < EPS);
            }
            Steering::Hold => panic!("tower buster should move"),
        }
    }

    // ---- King chasing ----

    #[test]
    fn test_king_chaser_holds_on_exact_boundary() {
        // Edge gap is exactly the attack range (0): hold, and no contact yet.
        let creep = creep_at(0.0, 0.0);
        let king = Circle::new(Vector2::new(40.0, 0.0), 30.0);
        assert_eq!(king_chasing(&creep, &king, 3.0), Steering::Hold);
        assert!(!in_king_contact(&creep.body, creep.attack_range, &king));
    }

    #[test]
    fn test_king_chaser_closes_distance() {
        let creep = creep_at(0.0, 0.0);
        let king = Circle::new(Vector2::new(300.0, 0.0), 30.0);
        match king_chasing(&creep, &king, 3.0) {
            Steering::MoveTo(next) => {
                assert!((next.x - 50.0).abs() < EPS);
                assert!(next.y.abs() < EPS);
            }
            Steering::Hold => panic!("king chaser should advance"),
        }
    }

    #[test]
    fn test_king_chaser_final_step_stops_at_standoff() {
        let creep = creep_at(0.0, 0.0);
        let king = Circle::new(Vector2::new(45.0, 0.0), 30.0);
        match king_chasing(&creep, &king, 3.0) {
            Steering::MoveTo(next) => {
                assert!((next.x - 42.0).abs() < EPS, "got {next:?}");
                assert!(in_king_contact(
                    &Circle::new(next, creep.body.radius),
                    creep.attack_range,
                    &king
                ));
            }
            Steering::Hold => panic!("king chaser should advance"),
        }
    }

    #[test]
    fn test_ranged_king_chaser_holds_inside_range() {
        let mut creep = creep_at(0.0, 0.0);
        creep.attack_range = 100.0;
        let king = Circle::new(Vector2::new(120.0, 0.0), 30.0);
        assert_eq!(king_chasing(&creep, &king, 3.0), Steering::Hold);
        assert!(in_king_contact(&creep.body, creep.attack_range, &king));
    }

    // ---- Melee ----

    #[test]
    fn test_adjacent_tower_uses_edge_gap() {
        let creep = Circle::new(Vector2::ZERO, 20.0);
        let towers = [
            Circle::new(Vector2::new(200.0, 0.0), 60.0),
            // gap = 85 - 20 - 60 = 5
            Circle::new(Vector2::new(0.0, 85.0), 60.0),
        ];
        assert_eq!(adjacent_tower(&creep, &towers, 10.0), Some(1));
        assert_eq!(adjacent_tower(&creep, &towers, 5.0), None);
    }

    #[test]
    fn test_gap_is_negative_when_overlapping() {
        let a = Circle::new(Vector2::ZERO, 10.0);
        let b = Circle::new(Vector2::new(5.0, 0.0), 10.0);
        assert!((a.gap_to(&b) + 15.0).abs() < EPS);
    }
}
