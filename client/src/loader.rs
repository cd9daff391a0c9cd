use iranmap_shared::{DisplayProperties, GeoFeature, LoadError, LoadStage, parse_features};

/// Everything fetched during the initial load.
pub struct LoadedMap {
    pub features: Vec<GeoFeature>,
    pub display: DisplayProperties,
}

async fn fetch_text(stage: LoadStage, url: &str) -> Result<String, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch {
            stage,
            message: e.to_string(),
        })?;

    if !resp.ok() {
        return Err(LoadError::Status {
            stage,
            status: resp.status(),
        });
    }

    resp.text().await.map_err(|e| LoadError::Fetch {
        stage,
        message: e.to_string(),
    })
}

/// Run every stage in order, stopping at the first failure. No retries.
pub async fn load(geo_src: &str, properties_src: &str) -> Result<LoadedMap, LoadError> {
    let mut loaded = LoadedMap {
        features: Vec::new(),
        display: DisplayProperties::default(),
    };
    for stage in LoadStage::ORDER {
        let url = match stage {
            LoadStage::Geography => geo_src,
            LoadStage::DisplayProperties => properties_src,
        };
        let text = fetch_text(stage, url).await?;
        match stage {
            LoadStage::Geography => {
                loaded.features = parse_features(&text).map_err(|e| LoadError::parse(stage, e))?;
            }
            LoadStage::DisplayProperties => {
                loaded.display =
                    DisplayProperties::from_json(&text).map_err(|e| LoadError::parse(stage, e))?;
            }
        }
    }
    Ok(loaded)
}
