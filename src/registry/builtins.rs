//! The builtin method and parameter tables.
//!
//! Constructed once, at compile time, and never mutated. The numeric codes
//! are the geodetic registry (EPSG) codes; methods without a registry code
//! carry 0 and are identified by name only.

use super::MethodMapping;
use super::ParamMapping;
use crate::units::UnitType::*;

/// Registry codes, named for readability at the places the engine
/// dispatches on them
pub mod codes {
    // Geocentric translations (3-parameter)
    pub const GEOCENTRIC_TRANSLATIONS_GEOCENTRIC: u32 = 1031;
    pub const GEOCENTRIC_TRANSLATIONS_GEOG2D: u32 = 9603;
    pub const GEOCENTRIC_TRANSLATIONS_GEOG3D: u32 = 1035;

    // Helmert 7-parameter
    pub const POSITION_VECTOR_GEOCENTRIC: u32 = 1033;
    pub const POSITION_VECTOR_GEOG2D: u32 = 9606;
    pub const POSITION_VECTOR_GEOG3D: u32 = 1037;
    pub const COORDINATE_FRAME_GEOCENTRIC: u32 = 1032;
    pub const COORDINATE_FRAME_GEOG2D: u32 = 9607;
    pub const COORDINATE_FRAME_GEOG3D: u32 = 1038;

    // Helmert 15-parameter (time-dependent)
    pub const TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC: u32 = 1053;
    pub const TIME_DEPENDENT_POSITION_VECTOR_GEOG2D: u32 = 1054;
    pub const TIME_DEPENDENT_POSITION_VECTOR_GEOG3D: u32 = 1055;
    pub const TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC: u32 = 1056;
    pub const TIME_DEPENDENT_COORDINATE_FRAME_GEOG2D: u32 = 1057;
    pub const TIME_DEPENDENT_COORDINATE_FRAME_GEOG3D: u32 = 1058;

    // Helmert with evaluation point
    pub const MOLODENSKY_BADEKAS_GEOCENTRIC: u32 = 1034;
    pub const MOLODENSKY_BADEKAS_GEOG2D: u32 = 9636;

    // Direct geographic-domain datum shifts
    pub const MOLODENSKY: u32 = 9604;
    pub const ABRIDGED_MOLODENSKY: u32 = 9605;

    // Offsets
    pub const LONGITUDE_ROTATION: u32 = 9601;
    pub const GEOGRAPHIC2D_OFFSETS: u32 = 9619;
    pub const GEOGRAPHIC3D_OFFSETS: u32 = 9660;
    pub const VERTICAL_OFFSET: u32 = 9616;

    // Bookkeeping
    pub const CHANGE_OF_VERTICAL_UNIT: u32 = 1069;
    pub const HEIGHT_DEPTH_REVERSAL: u32 = 1068;
    pub const AXIS_ORDER_REVERSAL_2D: u32 = 9843;
    pub const AXIS_ORDER_REVERSAL_3D: u32 = 9844;

    // Grid interpolation
    pub const NTV1: u32 = 9614;
    pub const NTV2: u32 = 9615;
    pub const NADCON: u32 = 9613;
    pub const VERTCON: u32 = 9658;
    pub const VERTICAL_OFFSET_GTX: u32 = 1084;
    pub const GEOGRAPHIC3D_TO_GRAVITY_RELATED_HEIGHT_GTX: u32 = 9665;
    pub const GEOCENTRIC_TRANSLATION_BY_GRID_IGN: u32 = 1087;
    pub const POINT_MOTION_BY_GRID_CANADA: u32 = 1070;

    // Conversions (the ones the equivalence engine special-cases)
    pub const GEOGRAPHIC_GEOCENTRIC: u32 = 9602;
    pub const LAMBERT_CONIC_CONFORMAL_1SP: u32 = 9801;
    pub const LAMBERT_CONIC_CONFORMAL_2SP: u32 = 9802;
    pub const MERCATOR_VARIANT_A: u32 = 9804;
    pub const MERCATOR_VARIANT_B: u32 = 9805;
    pub const MERCATOR_SPHERICAL: u32 = 1026;
    pub const POPULAR_VISUALISATION_PSEUDO_MERCATOR: u32 = 1024;
    pub const HOTINE_OBLIQUE_MERCATOR_VARIANT_A: u32 = 9812;

    // Parameters
    pub const X_AXIS_TRANSLATION: u32 = 8605;
    pub const Y_AXIS_TRANSLATION: u32 = 8606;
    pub const Z_AXIS_TRANSLATION: u32 = 8607;
    pub const X_AXIS_ROTATION: u32 = 8608;
    pub const Y_AXIS_ROTATION: u32 = 8609;
    pub const Z_AXIS_ROTATION: u32 = 8610;
    pub const SCALE_DIFFERENCE: u32 = 8611;
    pub const RATE_X_AXIS_TRANSLATION: u32 = 1040;
    pub const RATE_Y_AXIS_TRANSLATION: u32 = 1041;
    pub const RATE_Z_AXIS_TRANSLATION: u32 = 1042;
    pub const RATE_X_AXIS_ROTATION: u32 = 1043;
    pub const RATE_Y_AXIS_ROTATION: u32 = 1044;
    pub const RATE_Z_AXIS_ROTATION: u32 = 1045;
    pub const RATE_SCALE_DIFFERENCE: u32 = 1046;
    pub const PARAMETER_REFERENCE_EPOCH: u32 = 1047;
    pub const EVALUATION_POINT_ORDINATE_1: u32 = 8617;
    pub const EVALUATION_POINT_ORDINATE_2: u32 = 8618;
    pub const EVALUATION_POINT_ORDINATE_3: u32 = 8667;
    pub const SEMI_MAJOR_AXIS_DIFFERENCE: u32 = 8654;
    pub const FLATTENING_DIFFERENCE: u32 = 8655;
    pub const LATITUDE_OFFSET: u32 = 8601;
    pub const LONGITUDE_OFFSET: u32 = 8602;
    pub const VERTICAL_OFFSET_PARAM: u32 = 8603;
    pub const UNIT_CONVERSION_SCALAR: u32 = 1051;
    pub const LATITUDE_NATURAL_ORIGIN: u32 = 8801;
    pub const LONGITUDE_NATURAL_ORIGIN: u32 = 8802;
    pub const SCALE_FACTOR_NATURAL_ORIGIN: u32 = 8805;
    pub const FALSE_EASTING: u32 = 8806;
    pub const FALSE_NORTHING: u32 = 8807;
    pub const LATITUDE_FALSE_ORIGIN: u32 = 8821;
    pub const LONGITUDE_FALSE_ORIGIN: u32 = 8822;
    pub const LATITUDE_1ST_STD_PARALLEL: u32 = 8823;
    pub const LATITUDE_2ND_STD_PARALLEL: u32 = 8824;
    pub const EASTING_FALSE_ORIGIN: u32 = 8826;
    pub const NORTHING_FALSE_ORIGIN: u32 = 8827;
    pub const LATITUDE_PROJECTION_CENTRE: u32 = 8811;
    pub const LONGITUDE_PROJECTION_CENTRE: u32 = 8812;
    pub const AZIMUTH_INITIAL_LINE: u32 = 8813;
    pub const ANGLE_RECTIFIED_TO_SKEW_GRID: u32 = 8814;
    pub const SCALE_FACTOR_INITIAL_LINE: u32 = 8815;
}

// ----- P A R A M E T E R   M A P P I N G S -------------------------------------------

#[rustfmt::skip]
pub static TX: ParamMapping = ParamMapping { name: "X-axis translation", code: 8605, legacy: "X_Axis_Translation", unit_type: Linear, step_key: "x" };
#[rustfmt::skip]
pub static TY: ParamMapping = ParamMapping { name: "Y-axis translation", code: 8606, legacy: "Y_Axis_Translation", unit_type: Linear, step_key: "y" };
#[rustfmt::skip]
pub static TZ: ParamMapping = ParamMapping { name: "Z-axis translation", code: 8607, legacy: "Z_Axis_Translation", unit_type: Linear, step_key: "z" };
#[rustfmt::skip]
pub static RX: ParamMapping = ParamMapping { name: "X-axis rotation", code: 8608, legacy: "X_Axis_Rotation", unit_type: Angular, step_key: "rx" };
#[rustfmt::skip]
pub static RY: ParamMapping = ParamMapping { name: "Y-axis rotation", code: 8609, legacy: "Y_Axis_Rotation", unit_type: Angular, step_key: "ry" };
#[rustfmt::skip]
pub static RZ: ParamMapping = ParamMapping { name: "Z-axis rotation", code: 8610, legacy: "Z_Axis_Rotation", unit_type: Angular, step_key: "rz" };
#[rustfmt::skip]
pub static DS: ParamMapping = ParamMapping { name: "Scale difference", code: 8611, legacy: "Scale_Difference", unit_type: Scale, step_key: "s" };
#[rustfmt::skip]
pub static DTX: ParamMapping = ParamMapping { name: "Rate of change of X-axis translation", code: 1040, legacy: "", unit_type: Linear, step_key: "dx" };
#[rustfmt::skip]
pub static DTY: ParamMapping = ParamMapping { name: "Rate of change of Y-axis translation", code: 1041, legacy: "", unit_type: Linear, step_key: "dy" };
#[rustfmt::skip]
pub static DTZ: ParamMapping = ParamMapping { name: "Rate of change of Z-axis translation", code: 1042, legacy: "", unit_type: Linear, step_key: "dz" };
#[rustfmt::skip]
pub static DRX: ParamMapping = ParamMapping { name: "Rate of change of X-axis rotation", code: 1043, legacy: "", unit_type: Angular, step_key: "drx" };
#[rustfmt::skip]
pub static DRY: ParamMapping = ParamMapping { name: "Rate of change of Y-axis rotation", code: 1044, legacy: "", unit_type: Angular, step_key: "dry" };
#[rustfmt::skip]
pub static DRZ: ParamMapping = ParamMapping { name: "Rate of change of Z-axis rotation", code: 1045, legacy: "", unit_type: Angular, step_key: "drz" };
#[rustfmt::skip]
pub static DDS: ParamMapping = ParamMapping { name: "Rate of change of Scale difference", code: 1046, legacy: "", unit_type: Scale, step_key: "ds" };
#[rustfmt::skip]
pub static T_EPOCH: ParamMapping = ParamMapping { name: "Parameter reference epoch", code: 1047, legacy: "", unit_type: Time, step_key: "t_epoch" };
#[rustfmt::skip]
pub static PX: ParamMapping = ParamMapping { name: "Ordinate 1 of evaluation point", code: 8617, legacy: "", unit_type: Linear, step_key: "px" };
#[rustfmt::skip]
pub static PY: ParamMapping = ParamMapping { name: "Ordinate 2 of evaluation point", code: 8618, legacy: "", unit_type: Linear, step_key: "py" };
#[rustfmt::skip]
pub static PZ: ParamMapping = ParamMapping { name: "Ordinate 3 of evaluation point", code: 8667, legacy: "", unit_type: Linear, step_key: "pz" };
// The Molodensky step takes its translations under d-prefixed keys
#[rustfmt::skip]
pub static MOL_TX: ParamMapping = ParamMapping { name: "X-axis translation", code: 8605, legacy: "X_Axis_Translation", unit_type: Linear, step_key: "dx" };
#[rustfmt::skip]
pub static MOL_TY: ParamMapping = ParamMapping { name: "Y-axis translation", code: 8606, legacy: "Y_Axis_Translation", unit_type: Linear, step_key: "dy" };
#[rustfmt::skip]
pub static MOL_TZ: ParamMapping = ParamMapping { name: "Z-axis translation", code: 8607, legacy: "Z_Axis_Translation", unit_type: Linear, step_key: "dz" };
#[rustfmt::skip]
pub static DA: ParamMapping = ParamMapping { name: "Semi-major axis length difference", code: 8654, legacy: "", unit_type: Linear, step_key: "da" };
#[rustfmt::skip]
pub static DF: ParamMapping = ParamMapping { name: "Flattening difference", code: 8655, legacy: "", unit_type: None, step_key: "df" };
#[rustfmt::skip]
pub static LATITUDE_OFFSET: ParamMapping = ParamMapping { name: "Latitude offset", code: 8601, legacy: "", unit_type: Angular, step_key: "dlat" };
#[rustfmt::skip]
pub static LONGITUDE_OFFSET: ParamMapping = ParamMapping { name: "Longitude offset", code: 8602, legacy: "", unit_type: Angular, step_key: "dlon" };
#[rustfmt::skip]
pub static VERTICAL_OFFSET: ParamMapping = ParamMapping { name: "Vertical offset", code: 8603, legacy: "", unit_type: Linear, step_key: "dh" };
#[rustfmt::skip]
pub static UNIT_CONVERSION_SCALAR: ParamMapping = ParamMapping { name: "Unit conversion scalar", code: 1051, legacy: "", unit_type: Scale, step_key: "s33" };

// Grid file parameters. Pipeline key is uniformly "grids"
#[rustfmt::skip]
pub static LAT_LON_DIFFERENCE_FILE: ParamMapping = ParamMapping { name: "Latitude and longitude difference file", code: 8656, legacy: "", unit_type: None, step_key: "grids" };
#[rustfmt::skip]
pub static LATITUDE_DIFFERENCE_FILE: ParamMapping = ParamMapping { name: "Latitude difference file", code: 8657, legacy: "", unit_type: None, step_key: "grids" };
#[rustfmt::skip]
pub static LONGITUDE_DIFFERENCE_FILE: ParamMapping = ParamMapping { name: "Longitude difference file", code: 8658, legacy: "", unit_type: None, step_key: "grids" };
#[rustfmt::skip]
pub static GEOID_MODEL_FILE: ParamMapping = ParamMapping { name: "Geoid (height correction) model file", code: 8666, legacy: "", unit_type: None, step_key: "grids" };
#[rustfmt::skip]
pub static VERTICAL_OFFSET_FILE: ParamMapping = ParamMapping { name: "Vertical offset file", code: 8732, legacy: "", unit_type: None, step_key: "grids" };
#[rustfmt::skip]
pub static GEOCENTRIC_TRANSLATION_FILE: ParamMapping = ParamMapping { name: "Geocentric translation file", code: 8727, legacy: "", unit_type: None, step_key: "grids" };
#[rustfmt::skip]
pub static VELOCITY_GRID_FILE: ParamMapping = ParamMapping { name: "Point motion velocity grid file", code: 1050, legacy: "", unit_type: None, step_key: "grids" };
#[rustfmt::skip]
pub static TIN_OFFSET_FILE: ParamMapping = ParamMapping { name: "TIN offset file", code: 0, legacy: "", unit_type: None, step_key: "file" };
#[rustfmt::skip]
pub static DEFORMATION_MODEL_NAME: ParamMapping = ParamMapping { name: "Deformation model name", code: 0, legacy: "", unit_type: None, step_key: "model" };

// Projection parameters
#[rustfmt::skip]
pub static LAT_0: ParamMapping = ParamMapping { name: "Latitude of natural origin", code: 8801, legacy: "latitude_of_origin", unit_type: Angular, step_key: "lat_0" };
#[rustfmt::skip]
pub static LON_0: ParamMapping = ParamMapping { name: "Longitude of natural origin", code: 8802, legacy: "central_meridian", unit_type: Angular, step_key: "lon_0" };
#[rustfmt::skip]
pub static K_0: ParamMapping = ParamMapping { name: "Scale factor at natural origin", code: 8805, legacy: "scale_factor", unit_type: Scale, step_key: "k_0" };
#[rustfmt::skip]
pub static X_0: ParamMapping = ParamMapping { name: "False easting", code: 8806, legacy: "false_easting", unit_type: Linear, step_key: "x_0" };
#[rustfmt::skip]
pub static Y_0: ParamMapping = ParamMapping { name: "False northing", code: 8807, legacy: "false_northing", unit_type: Linear, step_key: "y_0" };
#[rustfmt::skip]
pub static LAT_FALSE_ORIGIN: ParamMapping = ParamMapping { name: "Latitude of false origin", code: 8821, legacy: "latitude_of_origin", unit_type: Angular, step_key: "lat_0" };
#[rustfmt::skip]
pub static LON_FALSE_ORIGIN: ParamMapping = ParamMapping { name: "Longitude of false origin", code: 8822, legacy: "central_meridian", unit_type: Angular, step_key: "lon_0" };
#[rustfmt::skip]
pub static LAT_1: ParamMapping = ParamMapping { name: "Latitude of 1st standard parallel", code: 8823, legacy: "standard_parallel_1", unit_type: Angular, step_key: "lat_1" };
#[rustfmt::skip]
pub static LAT_2: ParamMapping = ParamMapping { name: "Latitude of 2nd standard parallel", code: 8824, legacy: "standard_parallel_2", unit_type: Angular, step_key: "lat_2" };
#[rustfmt::skip]
pub static EASTING_FALSE_ORIGIN: ParamMapping = ParamMapping { name: "Easting at false origin", code: 8826, legacy: "false_easting", unit_type: Linear, step_key: "x_0" };
#[rustfmt::skip]
pub static NORTHING_FALSE_ORIGIN: ParamMapping = ParamMapping { name: "Northing at false origin", code: 8827, legacy: "false_northing", unit_type: Linear, step_key: "y_0" };
#[rustfmt::skip]
pub static LAT_CENTRE: ParamMapping = ParamMapping { name: "Latitude of projection centre", code: 8811, legacy: "latitude_of_center", unit_type: Angular, step_key: "lat_0" };
#[rustfmt::skip]
pub static LON_CENTRE: ParamMapping = ParamMapping { name: "Longitude of projection centre", code: 8812, legacy: "longitude_of_center", unit_type: Angular, step_key: "lonc" };
#[rustfmt::skip]
pub static AZIMUTH: ParamMapping = ParamMapping { name: "Azimuth of initial line", code: 8813, legacy: "azimuth", unit_type: Angular, step_key: "alpha" };
#[rustfmt::skip]
pub static RECTIFIED_GRID_ANGLE: ParamMapping = ParamMapping { name: "Angle from Rectified to Skew Grid", code: 8814, legacy: "rectified_grid_angle", unit_type: Angular, step_key: "gamma" };
#[rustfmt::skip]
pub static K_INITIAL_LINE: ParamMapping = ParamMapping { name: "Scale factor on initial line", code: 8815, legacy: "scale_factor", unit_type: Scale, step_key: "k_0" };

// ----- P A R A M E T E R   G R O U P S -----------------------------------------------

static THREE_PARAM: [&ParamMapping; 3] = [&TX, &TY, &TZ];
static SEVEN_PARAM: [&ParamMapping; 7] = [&TX, &TY, &TZ, &RX, &RY, &RZ, &DS];
static FIFTEEN_PARAM: [&ParamMapping; 15] = [
    &TX, &TY, &TZ, &RX, &RY, &RZ, &DS, &DTX, &DTY, &DTZ, &DRX, &DRY, &DRZ, &DDS, &T_EPOCH,
];
static TEN_PARAM: [&ParamMapping; 10] = [&TX, &TY, &TZ, &RX, &RY, &RZ, &DS, &PX, &PY, &PZ];
static MOLODENSKY_PARAM: [&ParamMapping; 5] = [&MOL_TX, &MOL_TY, &MOL_TZ, &DA, &DF];

// ----- M E T H O D   M A P P I N G S -------------------------------------------------

macro_rules! method {
    ($ident:ident, $name:literal, $code:literal, $legacy:literal, $step:literal, $flags:expr, $params:expr) => {
        pub static $ident: MethodMapping = MethodMapping {
            name: $name,
            code: $code,
            legacy: $legacy,
            step: $step,
            step_flags: &$flags,
            params: &$params,
        };
    };
}

method!(GEOCENTRIC_TRANSLATIONS_GEOCENTRIC, "Geocentric translations (geocentric domain)", 1031, "Geocentric_Translation", "helmert", [], THREE_PARAM);
method!(GEOCENTRIC_TRANSLATIONS_GEOG2D, "Geocentric translations (geog2D domain)", 9603, "Geocentric_Translation", "helmert", [], THREE_PARAM);
method!(GEOCENTRIC_TRANSLATIONS_GEOG3D, "Geocentric translations (geog3D domain)", 1035, "Geocentric_Translation", "helmert", [], THREE_PARAM);

method!(POSITION_VECTOR_GEOCENTRIC, "Position Vector transformation (geocentric domain)", 1033, "Position_Vector", "helmert", ["convention=position_vector"], SEVEN_PARAM);
method!(POSITION_VECTOR_GEOG2D, "Position Vector transformation (geog2D domain)", 9606, "Position_Vector", "helmert", ["convention=position_vector"], SEVEN_PARAM);
method!(POSITION_VECTOR_GEOG3D, "Position Vector transformation (geog3D domain)", 1037, "Position_Vector", "helmert", ["convention=position_vector"], SEVEN_PARAM);
method!(COORDINATE_FRAME_GEOCENTRIC, "Coordinate Frame rotation (geocentric domain)", 1032, "Coordinate_Frame", "helmert", ["convention=coordinate_frame"], SEVEN_PARAM);
method!(COORDINATE_FRAME_GEOG2D, "Coordinate Frame rotation (geog2D domain)", 9607, "Coordinate_Frame", "helmert", ["convention=coordinate_frame"], SEVEN_PARAM);
method!(COORDINATE_FRAME_GEOG3D, "Coordinate Frame rotation (geog3D domain)", 1038, "Coordinate_Frame", "helmert", ["convention=coordinate_frame"], SEVEN_PARAM);

method!(TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC, "Time-dependent Position Vector tfm (geocentric)", 1053, "", "helmert", ["convention=position_vector"], FIFTEEN_PARAM);
method!(TIME_DEPENDENT_POSITION_VECTOR_GEOG2D, "Time-dependent Position Vector tfm (geog2D)", 1054, "", "helmert", ["convention=position_vector"], FIFTEEN_PARAM);
method!(TIME_DEPENDENT_POSITION_VECTOR_GEOG3D, "Time-dependent Position Vector tfm (geog3D)", 1055, "", "helmert", ["convention=position_vector"], FIFTEEN_PARAM);
method!(TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC, "Time-dependent Coordinate Frame rotation (geocentric)", 1056, "", "helmert", ["convention=coordinate_frame"], FIFTEEN_PARAM);
method!(TIME_DEPENDENT_COORDINATE_FRAME_GEOG2D, "Time-dependent Coordinate Frame rotation (geog2D)", 1057, "", "helmert", ["convention=coordinate_frame"], FIFTEEN_PARAM);
method!(TIME_DEPENDENT_COORDINATE_FRAME_GEOG3D, "Time-dependent Coordinate Frame rotation (geog3D)", 1058, "", "helmert", ["convention=coordinate_frame"], FIFTEEN_PARAM);

method!(MOLODENSKY_BADEKAS_GEOCENTRIC, "Molodensky-Badekas (CF geocentric domain)", 1034, "Molodensky_Badekas", "helmert", ["convention=coordinate_frame"], TEN_PARAM);
method!(MOLODENSKY_BADEKAS_GEOG2D, "Molodensky-Badekas (CF geog2D domain)", 9636, "Molodensky_Badekas", "helmert", ["convention=coordinate_frame"], TEN_PARAM);

method!(MOLODENSKY, "Molodensky", 9604, "Molodensky", "molodensky", [], MOLODENSKY_PARAM);
method!(ABRIDGED_MOLODENSKY, "Abridged Molodensky", 9605, "Abridged_Molodensky", "molodensky", ["abridged"], MOLODENSKY_PARAM);

method!(LONGITUDE_ROTATION, "Longitude rotation", 9601, "Longitude_Rotation", "geogoffset", [], [&LONGITUDE_OFFSET]);
method!(GEOGRAPHIC2D_OFFSETS, "Geographic2D offsets", 9619, "", "geogoffset", [], [&LATITUDE_OFFSET, &LONGITUDE_OFFSET]);
method!(GEOGRAPHIC3D_OFFSETS, "Geographic3D offsets", 9660, "", "geogoffset", [], [&LATITUDE_OFFSET, &LONGITUDE_OFFSET, &VERTICAL_OFFSET]);
method!(VERTICAL_OFFSET_METHOD, "Vertical Offset", 9616, "", "geogoffset", [], [&VERTICAL_OFFSET]);

method!(CHANGE_OF_VERTICAL_UNIT, "Change of Vertical Unit", 1069, "", "affine", [], [&UNIT_CONVERSION_SCALAR]);
method!(HEIGHT_DEPTH_REVERSAL, "Height Depth Reversal", 1068, "", "axisswap", ["order=1,2,-3"], []);
method!(AXIS_ORDER_REVERSAL_2D, "Axis Order Reversal (2D)", 9843, "", "axisswap", ["order=2,1"], []);
method!(AXIS_ORDER_REVERSAL_3D, "Axis Order Reversal (Geographic3D horizontal)", 9844, "", "axisswap", ["order=2,1,3"], []);

method!(NTV1, "NTv1", 9614, "NTv1", "hgridshift", [], [&LAT_LON_DIFFERENCE_FILE]);
method!(NTV2, "NTv2", 9615, "NTv2", "hgridshift", [], [&LAT_LON_DIFFERENCE_FILE]);
method!(NADCON, "NADCON", 9613, "NADCON", "hgridshift", [], [&LATITUDE_DIFFERENCE_FILE, &LONGITUDE_DIFFERENCE_FILE]);
method!(CTABLE2, "CTABLE2", 0, "", "hgridshift", [], [&LAT_LON_DIFFERENCE_FILE]);
method!(VERTCON, "VERTCON", 9658, "VERTCON", "vgridshift", [], [&VERTICAL_OFFSET_FILE]);
method!(VERTICAL_OFFSET_GTX, "Vertical Offset by Grid Interpolation (gtx)", 1084, "", "vgridshift", [], [&VERTICAL_OFFSET_FILE]);
method!(GEOGRAPHIC3D_TO_GRAVITY_RELATED_HEIGHT_GTX, "Geographic3D to GravityRelatedHeight (gtx)", 9665, "", "vgridshift", [], [&GEOID_MODEL_FILE]);
method!(GEOCENTRIC_TRANSLATION_BY_GRID_IGN, "Geocentric translation by Grid Interpolation (IGN)", 1087, "", "xyzgridshift", [], [&GEOCENTRIC_TRANSLATION_FILE]);
method!(POINT_MOTION_BY_GRID_CANADA, "Point motion by grid (Canada NTv2_Vel)", 1070, "", "deformation", [], [&VELOCITY_GRID_FILE]);
method!(TIN_INTERPOLATION, "Coordinate transformation by TIN interpolation", 0, "", "tinshift", [], [&TIN_OFFSET_FILE]);
method!(DEFORMATION_MODEL, "Deformation model", 0, "", "defmodel", [], [&DEFORMATION_MODEL_NAME]);

method!(BALLPARK_GEOGRAPHIC_OFFSET, "Ballpark geographic offset", 0, "", "noop", [], []);

method!(GEOGRAPHIC_GEOCENTRIC, "Geographic/geocentric conversions", 9602, "Geocentric_Conversion", "cart", [], []);
method!(LAMBERT_CONIC_CONFORMAL_1SP, "Lambert Conic Conformal (1SP)", 9801, "Lambert_Conformal_Conic_1SP", "lcc", [], [&LAT_0, &LON_0, &K_0, &X_0, &Y_0]);
method!(LAMBERT_CONIC_CONFORMAL_2SP, "Lambert Conic Conformal (2SP)", 9802, "Lambert_Conformal_Conic_2SP", "lcc", [], [&LAT_FALSE_ORIGIN, &LON_FALSE_ORIGIN, &LAT_1, &LAT_2, &EASTING_FALSE_ORIGIN, &NORTHING_FALSE_ORIGIN]);
method!(MERCATOR_VARIANT_A, "Mercator (variant A)", 9804, "Mercator_1SP", "merc", [], [&LAT_0, &LON_0, &K_0, &X_0, &Y_0]);
method!(MERCATOR_VARIANT_B, "Mercator (variant B)", 9805, "Mercator_2SP", "merc", [], [&LAT_1, &LON_0, &X_0, &Y_0]);
method!(MERCATOR_SPHERICAL, "Mercator (Spherical)", 1026, "", "merc", [], [&LAT_0, &LON_0, &X_0, &Y_0]);
method!(POPULAR_VISUALISATION_PSEUDO_MERCATOR, "Popular Visualisation Pseudo Mercator", 1024, "Mercator_Auxiliary_Sphere", "webmerc", [], [&LAT_0, &LON_0, &X_0, &Y_0]);
method!(HOTINE_OBLIQUE_MERCATOR_VARIANT_A, "Hotine Oblique Mercator (variant A)", 9812, "Hotine_Oblique_Mercator", "omerc", [], [&LAT_CENTRE, &LON_CENTRE, &AZIMUTH, &RECTIFIED_GRID_ANGLE, &K_INITIAL_LINE, &X_0, &Y_0]);

/// Every builtin method mapping, in registry order
pub static ALL: [&MethodMapping; 47] = [
    &GEOCENTRIC_TRANSLATIONS_GEOCENTRIC,
    &GEOCENTRIC_TRANSLATIONS_GEOG2D,
    &GEOCENTRIC_TRANSLATIONS_GEOG3D,
    &POSITION_VECTOR_GEOCENTRIC,
    &POSITION_VECTOR_GEOG2D,
    &POSITION_VECTOR_GEOG3D,
    &COORDINATE_FRAME_GEOCENTRIC,
    &COORDINATE_FRAME_GEOG2D,
    &COORDINATE_FRAME_GEOG3D,
    &TIME_DEPENDENT_POSITION_VECTOR_GEOCENTRIC,
    &TIME_DEPENDENT_POSITION_VECTOR_GEOG2D,
    &TIME_DEPENDENT_POSITION_VECTOR_GEOG3D,
    &TIME_DEPENDENT_COORDINATE_FRAME_GEOCENTRIC,
    &TIME_DEPENDENT_COORDINATE_FRAME_GEOG2D,
    &TIME_DEPENDENT_COORDINATE_FRAME_GEOG3D,
    &MOLODENSKY_BADEKAS_GEOCENTRIC,
    &MOLODENSKY_BADEKAS_GEOG2D,
    &MOLODENSKY,
    &ABRIDGED_MOLODENSKY,
    &LONGITUDE_ROTATION,
    &GEOGRAPHIC2D_OFFSETS,
    &GEOGRAPHIC3D_OFFSETS,
    &VERTICAL_OFFSET_METHOD,
    &CHANGE_OF_VERTICAL_UNIT,
    &HEIGHT_DEPTH_REVERSAL,
    &AXIS_ORDER_REVERSAL_2D,
    &AXIS_ORDER_REVERSAL_3D,
    &NTV1,
    &NTV2,
    &NADCON,
    &CTABLE2,
    &VERTCON,
    &VERTICAL_OFFSET_GTX,
    &GEOGRAPHIC3D_TO_GRAVITY_RELATED_HEIGHT_GTX,
    &GEOCENTRIC_TRANSLATION_BY_GRID_IGN,
    &POINT_MOTION_BY_GRID_CANADA,
    &TIN_INTERPOLATION,
    &DEFORMATION_MODEL,
    &BALLPARK_GEOGRAPHIC_OFFSET,
    &GEOGRAPHIC_GEOCENTRIC,
    &LAMBERT_CONIC_CONFORMAL_1SP,
    &LAMBERT_CONIC_CONFORMAL_2SP,
    &MERCATOR_VARIANT_A,
    &MERCATOR_VARIANT_B,
    &MERCATOR_SPHERICAL,
    &POPULAR_VISUALISATION_PSEUDO_MERCATOR,
    &HOTINE_OBLIQUE_MERCATOR_VARIANT_A,
];

// ----- T E S T S ---------------------------------------------------------------------
