//! Diesel schema for the `entregas` table.

diesel::table! {
    /// Delivery records, one row per truck delivery to a recipient on a date.
    entregas (id) {
        /// Engine-assigned record identifier.
        id -> Int4,
        /// Delivery date.
        fecha -> Date,
        /// Truck code.
        #[max_length = 10]
        camion -> Varchar,
        /// Recipient (household head) name.
        nombre -> Text,
        /// Delivered volume in liters.
        litros -> Nullable<Numeric>,
        /// Delivery outcome code.
        estado -> Int2,
        /// Reason accompanying the outcome.
        motivo -> Nullable<Text>,
        /// Recipient contact phone number.
        telefono -> Nullable<Text>,
        /// Delivery point latitude.
        latitud -> Nullable<Numeric>,
        /// Delivery point longitude.
        longitud -> Nullable<Numeric>,
        /// Proof-of-delivery photo reference.
        foto_url -> Nullable<Text>,
        /// Username of the recording actor.
        usuario -> Nullable<Text>,
        /// Engine-assigned creation timestamp.
        creado_en -> Timestamptz,
    }
}
