mod kitchensink;
