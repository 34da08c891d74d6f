use crate::model::{FetchState, FilterCounts, Item};
use crate::service::{User, Weather};

pub fn render_item(item: &Item) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    format!("[{}] {:>3}  {}", mark, item.id, item.text)
}

pub fn render_counts(counts: &FilterCounts) -> String {
    format!(
        "All ({}) | Pending ({}) | Completed ({})",
        counts.all, counts.incomplete, counts.completed
    )
}

/// Renders a fetch snapshot under `label`, delegating successful payloads to `data`.
pub fn render_state<T, F>(label: &str, state: &FetchState<T>, data: F) -> Vec<String>
where
    F: Fn(&T) -> Vec<String>,
{
    match state {
        FetchState::Idle => vec![format!("{}: idle", label)],
        FetchState::Loading => vec![format!("{}: loading...", label)],
        FetchState::Success { data: payload } => {
            let mut lines = vec![format!("{}:", label)];
            lines.extend(data(payload).into_iter().map(|l| format!("  {}", l)));
            lines
        }
        FetchState::Error { error_message } => vec![format!("{}: error: {}", label, error_message)],
    }
}

pub fn render_weather(weather: &Weather) -> Vec<String> {
    let place = match &weather.sys.country {
        Some(country) => format!("{}, {}", weather.name, country),
        None => weather.name.clone(),
    };
    let mut lines = vec![format!(
        "{}  {}° (feels like {}°)",
        place,
        weather.main.temp.round(),
        weather.main.feels_like.round()
    )];
    if let Some(condition) = weather.condition() {
        lines.push(condition.description.clone());
    }
    lines.push(format!(
        "H: {}° L: {}°",
        weather.main.temp_max.round(),
        weather.main.temp_min.round()
    ));
    lines.push(format!(
        "humidity {}%  wind {} m/s  pressure {} hPa",
        weather.main.humidity, weather.wind.speed, weather.main.pressure
    ));
    if let Some(km) = weather.visibility_km() {
        lines.push(format!("visibility {:.1} km", km));
    }
    if let (Some(rise), Some(set)) = (weather.sunrise(), weather.sunset()) {
        lines.push(format!(
            "sunrise {}  sunset {} (UTC)",
            rise.format("%H:%M"),
            set.format("%H:%M")
        ));
    }
    lines
}

pub fn render_user(user: &User) -> Vec<String> {
    let mut lines = vec![format!("#{} {} <{}>", user.id, user.name, user.email)];
    if let Some(phone) = &user.phone {
        lines.push(format!("phone {}", phone));
    }
    lines.push(format!("{} / {}", user.address.city, user.company.name));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    #[test]
    fn test_render_item() {
        let mut item = Item::new(ItemId::new(4), "Pay bills").unwrap();
        assert_eq!(render_item(&item), "[ ]   4  Pay bills");
        item.toggle();
        assert_eq!(render_item(&item), "[x]   4  Pay bills");
    }

    #[test]
    fn test_render_counts() {
        let counts = FilterCounts {
            all: 3,
            completed: 1,
            incomplete: 2,
        };
        assert_eq!(
            render_counts(&counts),
            "All (3) | Pending (2) | Completed (1)"
        );
    }

    #[test]
    fn test_render_state() {
        let to_lines = |n: &u32| vec![format!("value {}", n)];

        assert_eq!(
            render_state("lookup", &FetchState::Idle, to_lines),
            vec!["lookup: idle"]
        );
        assert_eq!(
            render_state("lookup", &FetchState::Loading, to_lines),
            vec!["lookup: loading..."]
        );
        assert_eq!(
            render_state("lookup", &FetchState::Success { data: 2 }, to_lines),
            vec!["lookup:", "  value 2"]
        );
        assert_eq!(
            render_state("lookup", &FetchState::error("City not found"), to_lines),
            vec!["lookup: error: City not found"]
        );
    }
}
