use crate::assets;
use cbd_chart_ui::components::{ChartHeader, StaticImage};
use dioxus::prelude::*;

const RECOMMENDATIONS: [&str; 4] = [
    "Add more bikes to the stations whose start/end destinations are in high-volume tourist areas - namely Lenox Hill, Chelsea (in Upper East Side) and Lower East Side. These stations include: W 21 St/6th Ave; W 22 St/10th Ave; Norfolk St/Broome St; Henry St/Grand St; 1st Ave/E 62 St; 1st Ave/E 68 St; and W 21 St/6th Ave and 9th Ave/W 22 St.",
    "If we look at rides>750, then we see that there are a lot of bike riders along the Hudson River. So places along the Hudson River that need to be stocked up include: Little West St/1 Pl; West St/Chambers St; Pier 40-Hudson River Park; 10th Ave/W 40 St. The station at Central Park S/6 Ave.",
    "Ensure that bikes are fully stocked in all these stations during the warmer months (May to October) in order to meet the higher demand, but provide a lower supply in winter and late autumn to reduce costs.",
    "Limitations of this analysis: We don't know how many bikes are stocked at each station at the beginning of the day. Also, we don't have any records of bike thefts or bike malfunctions.",
];

#[component]
pub fn RecommendationsPage() -> Element {
    let image = use_hook(assets::recommendations_image);

    rsx! {
        ChartHeader { title: "Conclusions and Recommendations".to_string() }
        StaticImage {
            image,
            alt: "CitiBike bikes in New York".to_string(),
        }
        h3 {
            "Our analysis has shown that CitiBike may consider the following recommendations when expanding their bike supply:"
        }
        ul {
            for item in RECOMMENDATIONS {
                li {
                    style: "margin-bottom: 8px;",
                    "{item}"
                }
            }
        }
    }
}
