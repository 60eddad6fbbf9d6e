//! Integration tests for curve rendering across the built-in table.

use rstest::{fixture, rstest};

use sfc::application::services::{DepthPolicy, RenderRequest, RenderResult, RenderService};
use sfc::domain::{PathCommand, Point, STEP_FACTOR};
use sfc::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn service() -> RenderService<'static> {
    RenderService::builtin(DepthPolicy::Clamp)
}

fn request(curve: &str, depth: i64, thickness: f64) -> RenderRequest {
    RenderRequest {
        curve: curve.into(),
        depth,
        thickness,
        color: "black".into(),
    }
}

fn render(service: &RenderService<'_>, curve: &str, depth: i64) -> RenderResult {
    service
        .render(&request(curve, depth, 3.0))
        .unwrap_or_else(|e| panic!("render {curve} at {depth}: {e}"))
}

/// Every user depth of `curve`, rendered in parallel.
fn render_every_depth(
    service: &RenderService<'_>,
    curve: &str,
    thickness: f64,
) -> Vec<RenderResult> {
    let max = service.table().get(curve).unwrap().max_user_depth();
    let requests: Vec<RenderRequest> = (0..=i64::from(max))
        .map(|depth| request(curve, depth, thickness))
        .collect();
    service
        .render_all(&requests)
        .unwrap_or_else(|e| panic!("render {curve}: {e}"))
}

#[rstest]
#[case("koch")]
#[case("hilbert")]
#[case("peano")]
#[case("gosper")]
#[case("sierpinski")]
#[case("rings")]
#[case("tree")]
#[case("plant")]
#[case("willow")]
#[case("dragon")]
#[case("island")]
fn given_curve_when_rendering_every_depth_then_path_starts_at_origin_and_grows(
    service: RenderService<'static>,
    #[case] curve: &str,
) {
    let mut previous = 0;
    for result in render_every_depth(&service, curve, 3.0) {
        let depth = result.depth;
        assert_eq!(
            result.path.commands().first(),
            Some(&PathCommand::MoveTo(Point::ORIGIN)),
            "{curve}@{depth}"
        );
        assert!(result.path.segment_count() > 0, "{curve}@{depth}: no segments");
        assert!(
            result.path.segment_count() >= previous,
            "{curve}@{depth}: segment count shrank"
        );
        previous = result.path.segment_count();
    }
}

#[rstest]
#[case("koch")]
#[case("hilbert")]
#[case("peano")]
#[case("gosper")]
#[case("sierpinski")]
#[case("rings")]
#[case("tree")]
#[case("plant")]
#[case("willow")]
#[case("dragon")]
#[case("island")]
fn given_hairline_thickness_when_rendering_every_depth_then_viewport_contains_all(
    service: RenderService<'static>,
    #[case] curve: &str,
) {
    for result in render_every_depth(&service, curve, 1e-4) {
        let outside = result
            .path
            .commands()
            .iter()
            .filter(|cmd| !result.viewport.contains(cmd.point()))
            .count();
        assert_eq!(outside, 0, "{curve}@{}: {:?}", result.depth, result.viewport);
    }
}

#[rstest]
#[case("koch", 3)]
#[case("gosper", 2)]
#[case("dragon", 6)]
#[case("tree", 4)]
fn given_same_request_when_rendering_twice_then_identical(
    service: RenderService<'static>,
    #[case] curve: &str,
    #[case] depth: i64,
) {
    let first = render(&service, curve, depth);
    let second = render(&service, curve, depth);
    assert_eq!(first.path_data(), second.path_data());
    assert_eq!(first, second);
}

#[rstest]
#[case("koch", 2, 1.0)]
#[case("hilbert", 3, 3.0)]
#[case("sierpinski", 4, 0.5)]
#[case("rings", 1, 10.0)]
#[case("plant", 2, 3.0)]
#[case("island", 1, 2.0)]
fn given_thickness_when_rendering_then_stroke_scales_with_viewport(
    service: RenderService<'static>,
    #[case] curve: &str,
    #[case] depth: i64,
    #[case] thickness: f64,
) {
    let result = service.render(&request(curve, depth, thickness)).unwrap();
    let ratio = result.viewport.diagonal() / result.stroke_width;
    let lower = STEP_FACTOR / thickness;
    let upper = STEP_FACTOR * std::f64::consts::SQRT_2 / thickness;
    assert!(
        ratio >= lower - 1e-9 && ratio <= upper + 1e-9,
        "ratio {ratio} outside [{lower}, {upper}]"
    );
}

#[rstest]
#[case("koch", 3)]
#[case("hilbert", 4)]
#[case("peano", 2)]
#[case("gosper", 3)]
#[case("tree", 5)]
#[case("willow", 6)]
#[case("dragon", 9)]
fn given_render_when_checking_points_then_viewport_contains_all(
    service: RenderService<'static>,
    #[case] curve: &str,
    #[case] depth: i64,
) {
    let result = render(&service, curve, depth);
    for cmd in result.path.commands() {
        assert!(
            result.viewport.contains(cmd.point()),
            "{:?} outside {:?}",
            cmd,
            result.viewport
        );
    }
}

#[rstest]
#[case("tree")]
#[case("plant")]
#[case("willow")]
fn given_branching_curve_when_rendering_then_pops_emit_moves(
    service: RenderService<'static>,
    #[case] curve: &str,
) {
    let result = render(&service, curve, 2);
    let moves = result.path.commands()[1..]
        .iter()
        .filter(|c| matches!(c, PathCommand::MoveTo(_)))
        .count();
    assert!(moves > 0, "{curve} emitted no branch returns");
}

#[rstest]
fn given_unbranched_curve_when_rendering_then_single_move(service: RenderService<'static>) {
    let result = render(&service, "hilbert", 3);
    assert_eq!(result.path.len(), result.path.segment_count() + 1);
}

#[rstest]
fn given_out_of_range_depth_when_clamping_then_same_as_max(service: RenderService<'static>) {
    let clamped = render(&service, "island", 40);
    let max = render(&service, "island", 4);
    assert_eq!(clamped.depth, 4);
    assert_eq!(clamped.path_data(), max.path_data());
}

#[test]
fn given_strict_policy_when_depth_negative_then_rejected() {
    let service = RenderService::builtin(DepthPolicy::Strict);
    let err = service.render(&request("dragon", -1, 3.0)).unwrap_err();
    assert!(err.to_string().contains("dragon"), "{err}");
}

#[rstest]
fn given_many_requests_when_rendering_in_parallel_then_matches_sequential(
    service: RenderService<'static>,
) {
    // Arrange
    let requests: Vec<RenderRequest> = service
        .table()
        .names()
        .map(|name| request(name, 2, 3.0))
        .collect();

    // Act
    let parallel = service.render_all(&requests).unwrap();
    let sequential: Vec<RenderResult> = requests
        .iter()
        .map(|r| service.render(r).unwrap())
        .collect();

    // Assert
    assert_eq!(parallel.len(), requests.len());
    assert_eq!(parallel, sequential);
}

#[rstest]
fn given_one_bad_request_when_rendering_all_then_error(service: RenderService<'static>) {
    let requests = vec![request("koch", 1, 3.0), request("nope", 1, 3.0)];
    assert!(service.render_all(&requests).is_err());
}
