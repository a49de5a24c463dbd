use super::Narrative;
use crate::assets;
use cbd_chart_ui::components::MapEmbed;
use dioxus::prelude::*;

#[component]
pub fn AggregatedMapPage() -> Element {
    // Read once per visit to the page
    let map = use_hook(assets::map_document);

    rsx! {
        p { "Interactive map showing aggregated bike trips over New York" }
        h2 { "Aggregated Bike Trips in New York" }
        MapEmbed { map }
        h4 {
            "Using the filter on the left-hand side of the map we can check whether the most popular start stations also appear in the most popular trips."
        }
        Narrative {
            text: "The 3 most popular start stations are W 21st Street/6th Avenue, West Street/Chambers Street and 1st Ave/E 68th Street."
        }
        Narrative {
            text: "With the aggregated bike trips filter enabled, we can see that even though West Street/Chambers Street is a popular start station, it doesn't account for the top 4 most commonly taken trips."
        }
        Narrative {
            text: "The most common routes (>900) are between W 21 St/6th Ave and W 22 St/10th Ave (933, Chelsea); Norfolk St/Broome St and Henry St/Grand St (989, Lower East Side); 1st Ave/E 62 St and 1st Ave/E 68 St (1200, Lenox Hill); and W 21 St/6th Ave and 9th Ave/W 22 St (1261, Chelsea)."
        }
        Narrative {
            text: "When you look at the routes with more than 700 daily bike rides, a lot of those routes are along the Hudson River and one route starts at Central Park S/6 Ave."
        }
    }
}
