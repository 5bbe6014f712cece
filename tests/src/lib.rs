#[cfg(test)]
mod tests {
    use geo_types::Coord;
    use rand::*;
    use street_lines::transform::{SPOT_LENGTH, SPOT_WIDTH, VERTEX_TEMPLATE};
    use street_lines::*;

    const ROUNDS: usize = 1000;

    fn random_bbox() -> BoundingBox {
        BoundingBox::new(
            random_range(-90.0..=90.0),
            random_range(-180.0..=180.0),
            random_range(-90.0..=90.0),
            random_range(-180.0..=180.0),
        )
        .unwrap()
    }

    fn length(a: Coord<f64>, b: Coord<f64>) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }

    #[test]
    fn test_always_one_record_with_id_one() {
        for _ in 0..ROUNDS {
            let records = calculate_parking_rectangles(&random_bbox(), None).unwrap();
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].id, 1);
        }
    }

    #[test]
    fn test_vertices_are_finite() {
        for _ in 0..ROUNDS {
            let records = calculate_parking_rectangles(&random_bbox(), None).unwrap();
            assert!(records[0].vertices.iter().all(GeoPoint::is_finite));
        }
    }

    #[test]
    fn test_back_converted_sides_match_template() {
        for _ in 0..ROUNDS {
            let bbox = random_bbox();
            // stay away from the poles where a meter is a huge longitude offset
            if bbox.center().latitude.abs() > 85.0 {
                continue;
            }
            let angle = sample_orientation(&mut rng());
            let records = parking_rectangles(&bbox, angle).unwrap();
            let frame = LocalFrame::new(bbox.center(), angle);
            let local = records[0].vertices.map(|v| frame.to_local(v).unwrap());

            let sides = [SPOT_LENGTH, SPOT_WIDTH, SPOT_LENGTH, SPOT_WIDTH];
            for (i, expected) in sides.into_iter().enumerate() {
                let side = length(local[i], local[(i + 1) % 4]);
                assert!((side - expected).abs() < 1e-4, "side {i} was {side}");
            }
            for (back, template) in local.iter().zip(VERTEX_TEMPLATE) {
                assert!(length(*back, template) < 1e-4);
            }
        }
    }

    #[test]
    fn test_same_seed_same_json() {
        for seed in 0..50 {
            let bbox = random_bbox();
            let mut first_rng = rngs::StdRng::seed_from_u64(seed);
            let mut second_rng = rngs::StdRng::seed_from_u64(seed);
            let first = calculate_parking_rectangles_with_rng(&bbox, None, &mut first_rng);
            let second = calculate_parking_rectangles_with_rng(&bbox, None, &mut second_rng);
            let first = rectangles_to_json(&first.unwrap()).unwrap();
            let second = rectangles_to_json(&second.unwrap()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_generic_coordinates() {
        let bbox = BoundingBox::new(0.0, 1.0, 2.0, 3.0).unwrap();
        let json = calculate_parking_rectangles_json(&bbox, None).unwrap();
        let rectangles: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(rectangles.len(), 1);
        assert!(rectangles[0].is_object());
        assert!(rectangles[0].get("id").is_some());
    }

    #[test]
    fn test_invalid_input() {
        let parsed = BoundingBox::parse("invalid", "1.0", "2.0", "3.0");
        let err = parsed.unwrap_err();
        assert!(matches!(err, InvalidInput::NotNumeric { .. }));
        assert!(ParkingError::from(err).is_invalid_input());
    }

    #[test]
    fn test_equator_and_sixty_degrees() {
        for lat in [0.0, 60.0] {
            let normalization = Matrix2::normalization(lat);
            assert!(normalization.is_finite());
            assert!(normalization.inverse().is_some());
            let bbox = BoundingBox::new(lat, 10.0, lat, 10.0).unwrap();
            let records = calculate_parking_rectangles(&bbox, None).unwrap();
            assert!(records[0].vertices.iter().all(GeoPoint::is_finite));
        }
    }

    #[test]
    fn test_spot_stays_near_center() {
        for _ in 0..ROUNDS {
            let bbox = random_bbox();
            let center = bbox.center();
            if center.latitude.abs() > 85.0 {
                continue;
            }
            let records = calculate_parking_rectangles(&bbox, None).unwrap();
            // the far corner is sqrt(7² + 1.25²) local meters out, and the
            // latitude offset uses the parallel's degree length, which
            // stretches the footprint north-south by up to 1 / cos(latitude)
            let limit = 8.0 / center.latitude.to_radians().cos();
            for v in records[0].vertices {
                let d = great_circle_distance(
                    center.latitude,
                    center.longitude,
                    v.latitude,
                    v.longitude,
                );
                assert!(d < limit, "{d} m from {center:?}");
            }
        }
    }
}
