use crate::surface::{ids, Node, Surface};
use crate::weather::{CurrentConditions, HourlyEntry, WeatherModel};

pub const PULSE_SCALE: &str = "scale(1.1)";
pub const REST_SCALE: &str = "scale(1)";

/// Writes the whole model into its display surfaces.
///
/// Starts the temperature pulse; the caller is expected to call
/// [`settle_temperature`] once the pulse has run.
pub fn render<S: Surface + ?Sized>(model: &WeatherModel, surface: &mut S) {
    render_current(&model.current, surface);
    render_hourly(&model.hourly, surface);
    render_precipitation(model.current.precipitation_chance, surface);
}

pub fn render_current<S: Surface + ?Sized>(current: &CurrentConditions, surface: &mut S) {
    surface.set_text(ids::CURRENT_TEMP, &format!("{}°F", current.temperature));
    surface.set_text(ids::CURRENT_CONDITION, &current.condition);
    surface.set_text(ids::FEELS_LIKE, &format!("{}°F", current.feels_like));
    surface.set_text(ids::HUMIDITY, &format!("{}%", current.humidity));
    surface.set_class(ids::CURRENT_ICON, &current.icon.glyph_class());

    surface.set_style(ids::CURRENT_TEMP, "transform", PULSE_SCALE);
}

pub fn settle_temperature<S: Surface + ?Sized>(surface: &mut S) {
    surface.set_style(ids::CURRENT_TEMP, "transform", REST_SCALE);
}

fn hourly_item(hour: &HourlyEntry) -> Node {
    Node::new("hourly-item")
        .with_child(Node::new("hourly-time").with_text(&hour.time))
        .with_child(Node::new("hourly-icon").with_child(Node::new(&hour.icon.glyph_class())))
        .with_child(Node::new("hourly-temp").with_text(&format!("{}°", hour.temperature)))
}

pub fn render_hourly<S: Surface + ?Sized>(hourly: &[HourlyEntry], surface: &mut S) {
    surface.clear_children(ids::HOURLY_FORECAST);
    for hour in hourly {
        surface.append_child(ids::HOURLY_FORECAST, hourly_item(hour));
    }
}

pub fn render_precipitation<S: Surface + ?Sized>(chance: i32, surface: &mut S) {
    surface.set_style(ids::PRECIP_CHANCE, "width", &format!("{chance}%"));
    surface.set_text(ids::CHANCE_TEXT, &format!("{chance}% in next hour"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;
    use crate::simulator::tick;
    use crate::surface::Document;
    use crate::weather::HOURLY_SLOTS;

    #[test]
    fn test_seed_scenario_renders_reference_text() {
        let mut model = WeatherModel::seed();
        tick(&mut model, &mut Scripted::still());

        let mut doc = Document::new();
        render(&model, &mut doc);

        assert_eq!(doc.text(ids::CURRENT_TEMP), "72°F");
        assert_eq!(doc.text(ids::CURRENT_CONDITION), "Light Rain");
        assert_eq!(doc.text(ids::FEELS_LIKE), "75°F");
        assert_eq!(doc.text(ids::HUMIDITY), "68%");
        assert_eq!(doc.text(ids::CHANCE_TEXT), "85% in next hour");
        assert_eq!(doc.style(ids::PRECIP_CHANCE, "width"), Some("85%"));
        assert_eq!(doc.class(ids::CURRENT_ICON), "fas fa-cloud-rain");
    }

    #[test]
    fn test_render_is_idempotent() {
        let model = WeatherModel::seed();
        let mut doc = Document::new();
        render(&model, &mut doc);
        let first = doc.clone();
        render(&model, &mut doc);
        assert_eq!(doc.texts(), first.texts());
        assert_eq!(doc, first);
    }

    #[test]
    fn test_hourly_strip_is_rebuilt_in_order() {
        let model = WeatherModel::seed();
        let mut doc = Document::new();
        render(&model, &mut doc);
        render(&model, &mut doc);

        let items = doc.children(ids::HOURLY_FORECAST);
        assert_eq!(items.len(), HOURLY_SLOTS);
        let times: Vec<&str> = items
            .iter()
            .filter_map(|n| n.find("hourly-time"))
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(times, model.labels());

        let third = &items[2];
        assert_eq!(third.find("hourly-temp").map(|n| n.text.as_str()), Some("76°"));
        assert!(third.find("fas fa-cloud-showers-heavy").is_some());
    }

    #[test]
    fn test_pulse_then_settle() {
        let mut doc = Document::new();
        render(&WeatherModel::seed(), &mut doc);
        assert_eq!(doc.style(ids::CURRENT_TEMP, "transform"), Some(PULSE_SCALE));
        settle_temperature(&mut doc);
        assert_eq!(doc.style(ids::CURRENT_TEMP, "transform"), Some(REST_SCALE));
    }
}
