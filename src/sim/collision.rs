//! Pairwise collision dispatch
//!
//! Tests every cross-set pair of live entities and hands overlapping pairs to
//! a resolver. The resolver owns all side effects, including marking entities
//! dead so that later pairs in the same pass skip them.

use super::state::Collidable;

/// Call `resolve(a, b)` for every live `a` in `set_a` and live `b` in `set_b`
/// whose rectangles overlap
///
/// `set_a` is the outer loop and `set_b` the inner one, both in collection
/// order. Liveness is re-read before each pair, so a kill inside `resolve`
/// takes effect immediately. Pass a single entity with
/// `std::slice::from_mut`. Returns the number of resolved pairs.
pub fn collide<A, B, F>(set_a: &mut [A], set_b: &mut [B], mut resolve: F) -> usize
where
    A: Collidable,
    B: Collidable,
    F: FnMut(&mut A, &mut B),
{
    let mut resolved = 0;
    for a in set_a.iter_mut() {
        for b in set_b.iter_mut() {
            if !a.is_alive() {
                break;
            }
            if !b.is_alive() {
                continue;
            }
            if a.rect().intersects(&b.rect()) {
                resolve(a, b);
                resolved += 1;
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    struct Box2 {
        rect: Rect,
        alive: bool,
        hits: u32,
    }

    impl Box2 {
        fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
            Self {
                rect: Rect::new(x, y, w, h),
                alive: true,
                hits: 0,
            }
        }
    }

    impl Collidable for Box2 {
        fn rect(&self) -> Rect {
            self.rect
        }

        fn is_alive(&self) -> bool {
            self.alive
        }
    }

    #[test]
    fn test_empty_sets_never_resolve() {
        let mut a: Vec<Box2> = Vec::new();
        let mut b = vec![Box2::new(0.0, 0.0, 10.0, 10.0)];
        let mut calls = 0;
        collide(&mut a, &mut b, |_, _| calls += 1);
        collide(&mut b, &mut a, |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_only_cross_set_pairs() {
        // The two boxes in `a` overlap each other but must never be paired
        let mut a = vec![
            Box2::new(0.0, 0.0, 10.0, 10.0),
            Box2::new(5.0, 5.0, 10.0, 10.0),
        ];
        let mut b = vec![Box2::new(100.0, 100.0, 10.0, 10.0)];
        assert_eq!(collide(&mut a, &mut b, |_, _| {}), 0);
    }

    #[test]
    fn test_iteration_order_outer_then_inner() {
        let mut a = vec![
            Box2::new(0.0, 0.0, 50.0, 50.0),
            Box2::new(10.0, 10.0, 50.0, 50.0),
        ];
        let mut b = vec![
            Box2::new(20.0, 20.0, 5.0, 5.0),
            Box2::new(30.0, 30.0, 5.0, 5.0),
        ];
        let mut order = Vec::new();
        collide(&mut a, &mut b, |a, b| order.push((a.rect.x, b.rect.x)));
        assert_eq!(
            order,
            vec![(0.0, 20.0), (0.0, 30.0), (10.0, 20.0), (10.0, 30.0)]
        );
    }

    #[test]
    fn test_dead_entities_are_skipped_mid_pass() {
        // One bullet over two enemies: the first kill consumes the bullet
        let mut bullets = vec![Box2::new(0.0, 0.0, 10.0, 10.0)];
        let mut enemies = vec![
            Box2::new(5.0, 5.0, 10.0, 10.0),
            Box2::new(2.0, 2.0, 10.0, 10.0),
        ];
        let resolved = collide(&mut bullets, &mut enemies, |bullet, enemy| {
            bullet.alive = false;
            enemy.alive = false;
        });
        assert_eq!(resolved, 1);
        assert!(!enemies[0].alive);
        assert!(enemies[1].alive);

        // Two bullets over one enemy: the second bullet sees a dead enemy
        let mut bullets = vec![
            Box2::new(0.0, 0.0, 10.0, 10.0),
            Box2::new(1.0, 1.0, 10.0, 10.0),
        ];
        let mut enemies = vec![Box2::new(5.0, 5.0, 10.0, 10.0)];
        let resolved = collide(&mut bullets, &mut enemies, |bullet, enemy| {
            bullet.alive = false;
            enemy.alive = false;
        });
        assert_eq!(resolved, 1);
        assert!(bullets[1].alive);
    }

    #[test]
    fn test_already_dead_never_matched() {
        let mut a = vec![Box2::new(0.0, 0.0, 10.0, 10.0)];
        let mut b = vec![Box2::new(0.0, 0.0, 10.0, 10.0)];
        b[0].alive = false;
        assert_eq!(collide(&mut a, &mut b, |_, _| {}), 0);
    }

    #[test]
    fn test_single_entity_against_collection() {
        let mut player = Box2::new(0.0, 0.0, 20.0, 20.0);
        let mut enemies = vec![
            Box2::new(10.0, 10.0, 5.0, 5.0),
            Box2::new(50.0, 50.0, 5.0, 5.0),
            Box2::new(15.0, 0.0, 5.0, 5.0),
        ];
        collide(&mut enemies, std::slice::from_mut(&mut player), |_, p| {
            p.hits += 1
        });
        assert_eq!(player.hits, 2);
    }

    proptest! {
        #[test]
        fn prop_resolves_iff_overlap(
            ax in -100i32..100, ay in -100i32..100, aw in 1i32..50, ah in 1i32..50,
            bx in -100i32..100, by in -100i32..100, bw in 1i32..50, bh in 1i32..50,
        ) {
            let mut a = vec![Box2::new(ax as f32, ay as f32, aw as f32, ah as f32)];
            let mut b = vec![Box2::new(bx as f32, by as f32, bw as f32, bh as f32)];
            let overlap = ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by;
            let resolved = collide(&mut a, &mut b, |_, _| {});
            prop_assert_eq!(resolved == 1, overlap);
        }
    }
}
