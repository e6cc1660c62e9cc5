//! End-to-end tool call tests through the public library API.

use serde_json::{Map, Value, json};
use weather_mcp_server::domains::tools::{ArgumentPolicy, RequestDispatcher, ToolError};
use weather_mcp_server::{Config, McpServer};

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn first_temperature(line: &str) -> i32 {
    let start = line.find(": ").map(|i| i + 2).unwrap_or(0);
    let digits: String = line[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    digits.parse().unwrap()
}

#[test]
fn current_weather_tokyo_imperial() {
    let dispatcher = RequestDispatcher::default();
    let text = dispatcher
        .call_tool(
            "get_current_weather",
            &args(json!({ "location": "Tokyo", "units": "imperial" })),
        )
        .unwrap();

    for expected in ["Tokyo, JP", "64°F", "Partly cloudy", "70%", "9.4 mph"] {
        assert!(text.contains(expected), "missing {expected:?} in {text}");
    }
}

#[test]
fn current_weather_non_metric_units_render_imperial() {
    let dispatcher = RequestDispatcher::default();
    let text = dispatcher
        .call_tool(
            "get_current_weather",
            &args(json!({ "location": "Seoul", "units": "bogus" })),
        )
        .unwrap();

    assert!(text.contains("Temperature: 59°F"), "{text}");
    assert!(text.contains("Wind Speed: 7.8 mph"), "{text}");
    assert!(!text.contains("°C"), "{text}");
    assert!(!text.contains("m/s"), "{text}");
}

#[test]
fn forecast_applies_fixed_offsets_for_every_location() {
    let dispatcher = RequestDispatcher::default();

    for location in ["Seoul", "TOKYO", "new york", "London", "paris", "Nairobi"] {
        for units in ["metric", "imperial", "bogus"] {
            let text = dispatcher
                .call_tool(
                    "get_forecast",
                    &args(json!({ "location": location, "units": units })),
                )
                .unwrap();

            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 5, "{text}");

            let today = first_temperature(lines[2]);
            let tomorrow = first_temperature(lines[3]);
            let day_three = first_temperature(lines[4]);

            assert_eq!(tomorrow, today + 2);
            assert_eq!(day_three, today - 1);
            assert!(lines[3].ends_with(", Partly cloudy"));
            assert!(lines[4].ends_with(", Light rain"));

            let suffix = if units == "metric" { "°C" } else { "°F" };
            assert!(lines[2].contains(suffix), "{text}");
        }
    }
}

#[test]
fn unknown_location_echoes_raw_input() {
    let dispatcher = RequestDispatcher::default();
    let text = dispatcher
        .call_tool("get_current_weather", &args(json!({ "location": "Ulaanbaatar" })))
        .unwrap();

    assert!(text.starts_with("Current weather in Ulaanbaatar:"));
    assert!(text.contains("Temperature: 20°C"));
    assert!(text.contains("Condition: Unknown"));
    assert!(text.contains("Humidity: 60%"));
    assert!(text.contains("Wind Speed: 3 m/s"));
}

#[test]
fn unknown_tool_fails_without_text() {
    let dispatcher = RequestDispatcher::default();
    let result = dispatcher.call_tool("get_sunrise", &args(json!({ "location": "Seoul" })));
    assert_eq!(result, Err(ToolError::UnknownTool("get_sunrise".to_string())));
    assert_eq!(result.unwrap_err().to_string(), "Unknown tool: get_sunrise");
}

#[test]
fn repeated_calls_are_byte_identical() {
    let dispatcher = RequestDispatcher::default();
    let arguments = args(json!({ "location": "Paris", "units": "imperial" }));

    for tool in ["get_current_weather", "get_forecast"] {
        let first = dispatcher.call_tool(tool, &arguments).unwrap();
        for _ in 0..3 {
            assert_eq!(dispatcher.call_tool(tool, &arguments).unwrap(), first);
        }
    }
}

#[test]
fn catalog_lists_two_tools_in_order() {
    let server = McpServer::new(Config::default());
    let tools = server.dispatcher().list_tools();

    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(names, ["get_current_weather", "get_forecast"]);

    for tool in tools {
        let properties = &tool.input_schema["properties"];
        assert_eq!(tool.input_schema["required"], json!(["location"]));
        assert_eq!(properties["units"]["default"], "metric");
    }
}

#[test]
fn strict_policy_enforces_declared_contract() {
    let dispatcher = RequestDispatcher::with_static_provider(ArgumentPolicy::Strict);

    let missing = dispatcher.call_tool("get_current_weather", &Map::new());
    assert!(matches!(missing, Err(ToolError::InvalidArguments(_))));

    let bad_units = dispatcher.call_tool(
        "get_current_weather",
        &args(json!({ "location": "Seoul", "units": "kelvin" })),
    );
    assert!(matches!(bad_units, Err(ToolError::InvalidArguments(_))));

    let ok = dispatcher
        .call_tool("get_current_weather", &args(json!({ "location": "Seoul" })))
        .unwrap();
    assert!(ok.contains("15°C"));
}

#[test]
fn dispatcher_is_shareable_across_threads() {
    let dispatcher = std::sync::Arc::new(RequestDispatcher::default());

    let handles: Vec<_> = ["Seoul", "Tokyo", "London", "Paris"]
        .into_iter()
        .map(|city| {
            let dispatcher = dispatcher.clone();
            std::thread::spawn(move || {
                dispatcher
                    .call_tool("get_current_weather", &args(json!({ "location": city })))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        let text = handle.join().unwrap();
        assert!(text.starts_with("Current weather in "));
    }
}
