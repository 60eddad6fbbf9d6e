//! Integration tests for shareable state strings and output formats.

use rstest::rstest;

use sfc::application::services::{DepthPolicy, RenderService};
use sfc::application::{format_result, to_svg, CurveState, OutputFormat};

#[rstest]
#[case("koch-2-3-black")]
#[case("dragon-12-0.5-red")]
#[case("rings-0-10-#ff00aa")]
#[case("willow-5-1-rgb(0,0,0)")]
fn given_state_without_dashed_color_when_round_tripping_then_identical(#[case] encoded: &str) {
    let state = CurveState::decode(encoded).unwrap();
    assert_eq!(state.encode(), encoded);
}

#[rstest]
#[case("", "koch-2-3-black")]
#[case("gosper", "gosper-2-3-black")]
#[case("gosper-4", "gosper-4-3-black")]
#[case("gosper-4-1.5", "gosper-4-1.5-black")]
#[case("gosper-4-1.5-blue-extra", "gosper-4-1.5-blue")]
fn given_partial_state_when_decoding_then_defaults_fill_in(
    #[case] encoded: &str,
    #[case] expected: &str,
) {
    assert_eq!(CurveState::decode(encoded).unwrap().encode(), expected);
}

#[rstest]
#[case("koch-x-3-black")]
#[case("koch-2-thick-black")]
fn given_non_numeric_part_when_decoding_then_error(#[case] encoded: &str) {
    assert!(CurveState::decode(encoded).is_err());
}

#[test]
fn given_state_when_naming_download_then_svg_file() {
    let state: CurveState = "hilbert-3-2-navy".parse().unwrap();
    assert_eq!(state.file_name(), "hilbert-3-2-navy.svg");
}

#[test]
fn given_render_when_formatting_then_each_format_carries_path() {
    // Arrange
    let service = RenderService::builtin(DepthPolicy::Clamp);
    let mut request = CurveState::decode("koch-0-3-black").unwrap().to_request();
    request.color = "a\"b<c>".into();
    let result = service.render(&request).unwrap();
    let data = result.path_data();

    // Act
    let svg = format_result(&result, OutputFormat::Svg).unwrap();
    let path = format_result(&result, OutputFormat::Path).unwrap();
    let json = format_result(&result, OutputFormat::Json).unwrap();

    // Assert
    assert_eq!(svg, to_svg(&result));
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox=""#));
    assert!(svg.contains(r#"stroke="a&quot;b&lt;c&gt;""#));
    assert!(svg.contains(&format!(r#"<path d="{data}"/>"#)));
    assert_eq!(path, "M0 0L600 0L300 -519.615L0 0");

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["curve"], "koch");
    assert_eq!(value["path_data"], data.as_str());
    assert_eq!(value["effective_depth"], 0);
}
