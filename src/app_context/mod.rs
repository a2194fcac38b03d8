use crate::geocoder::Geocoder;
use crate::map::models::Region;
use crate::storage::interface::ILocationStorage;

#[derive(Clone)]
pub struct AppContext<LS: ILocationStorage, G: Geocoder> {
    pub locations: LS,
    pub geocoder: G,
    pub region: Region,
}
