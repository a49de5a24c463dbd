use super::Narrative;
use crate::assets;
use cbd_chart_ui::components::StaticImage;
use dioxus::prelude::*;

#[component]
pub fn IntroPage() -> Element {
    let image = use_hook(assets::intro_image);

    rsx! {
        h3 {
            "This dashboard provides helpful insights about the obstacles that CitiBike currently faces as it is considering expanding its bike supply in New York."
        }
        h4 {
            "CitiBike has customers complaining about not being able to obtain bikes at certain times, and this analysis looks at the possible reasons behind this bike shortage. This dashboard contains an introduction page, an insights & analysis section where I analyze 3 variables that affect bike demand, and lastly a recommendations page. I dedicated 1 page for each of the variables that I analyzed and each has an accompanying visualization."
        }
        h5 { "-Introduction page" }
        h5 { "-Insights and Analysis" }
        ul {
            li { "Most popular start stations" }
            li { "Temperature and bike usage" }
            li { "Interactive map with aggregated bike trips" }
        }
        h5 { "-Conclusions and Recommendations" }
        Narrative {
            text: "The dropdown menu in the upper left-hand side of the page will allow you to select the different sections of our analysis."
        }
        StaticImage {
            image,
            alt: "CitiBike station".to_string(),
        }
    }
}
